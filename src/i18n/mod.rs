//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Bangla (Bangladesh)
    BnBD,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::BnBD => "বাংলা",
        }
    }

    /// Language code used in the settings file
    pub fn as_code(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::BnBD => "bn",
        }
    }

    /// Parse a settings-file language code, defaulting to English
    pub fn from_code(code: &str) -> Self {
        match code {
            "bn" => Locale::BnBD,
            _ => Locale::EnUS,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, bn))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("MediVision Admin", "মেডিভিশন অ্যাডমিন"));
    map.insert("app-brand", ("MediVision", "মেডিভিশন"));

    // Navigation
    map.insert("nav-dashboard", ("Dashboard", "ড্যাশবোর্ড"));
    map.insert("nav-medicines", ("Medicines", "ওষুধ"));
    map.insert("nav-users", ("Users", "ব্যবহারকারী"));
    map.insert("nav-profile", ("Profile", "প্রোফাইল"));

    // Actions
    map.insert("action-save", ("Save", "সংরক্ষণ"));
    map.insert("action-cancel", ("Cancel", "বাতিল"));
    map.insert("action-delete", ("Delete", "মুছুন"));
    map.insert("action-edit", ("Edit", "সম্পাদনা"));
    map.insert("action-close", ("Close", "বন্ধ"));
    map.insert("action-logout", ("Logout", "লগআউট"));
    map.insert("action-upload", ("Upload", "আপলোড"));
    map.insert("action-remove", ("Remove", "সরান"));

    // Login page
    map.insert("login-title", ("Admin Login", "অ্যাডমিন লগইন"));
    map.insert(
        "login-subtitle",
        (
            "Sign in to manage the MediVision catalog",
            "মেডিভিশন ক্যাটালগ পরিচালনা করতে সাইন ইন করুন",
        ),
    );
    map.insert("login-email", ("Email", "ইমেইল"));
    map.insert("login-password", ("Password", "পাসওয়ার্ড"));
    map.insert("login-remember", ("Remember me", "আমাকে মনে রাখুন"));
    map.insert("login-submit", ("Sign In", "সাইন ইন"));
    map.insert("login-signing-in", ("Signing in...", "সাইন ইন হচ্ছে..."));

    // Dashboard page
    map.insert("dash-total-medicines", ("Total Medicines", "মোট ওষুধ"));
    map.insert("dash-total-users", ("Total Users", "মোট ব্যবহারকারী"));
    map.insert("dash-active-users", ("Active Users", "সক্রিয় ব্যবহারকারী"));
    map.insert("dash-growth", ("Growth", "প্রবৃদ্ধি"));
    map.insert("dash-quick-actions", ("Quick Actions", "দ্রুত কাজ"));
    map.insert("dash-add-medicine", ("Add New Medicine", "নতুন ওষুধ যোগ করুন"));
    map.insert(
        "dash-add-medicine-hint",
        (
            "Register a new medicine in the catalog",
            "ক্যাটালগে নতুন ওষুধ নিবন্ধন করুন",
        ),
    );
    map.insert("dash-manage-users", ("Manage Users", "ব্যবহারকারী পরিচালনা"));
    map.insert(
        "dash-manage-users-hint",
        (
            "View accounts and assign roles",
            "অ্যাকাউন্ট দেখুন এবং ভূমিকা নির্ধারণ করুন",
        ),
    );
    map.insert("dash-system-status", ("System Status", "সিস্টেম অবস্থা"));
    map.insert("dash-database", ("Database", "ডাটাবেস"));
    map.insert("dash-db-connected", ("Connected", "সংযুক্ত"));
    map.insert("dash-api-server", ("API Server", "এপিআই সার্ভার"));
    map.insert("dash-api-online", ("Online", "অনলাইন"));
    map.insert("dash-api-offline", ("Offline", "অফলাইন"));
    map.insert("dash-last-backup", ("Last Backup", "সর্বশেষ ব্যাকআপ"));
    map.insert("dash-backup-value", ("2 hours ago", "২ ঘণ্টা আগে"));

    // Medicines page
    map.insert("med-title", ("Medicines", "ওষুধ"));
    map.insert(
        "med-search-placeholder",
        ("Search by name or brand...", "নাম বা ব্র্যান্ড দিয়ে খুঁজুন..."),
    );
    map.insert("med-add", ("Add Medicine", "ওষুধ যোগ করুন"));
    map.insert("med-add-title", ("Add New Medicine", "নতুন ওষুধ যোগ করুন"));
    map.insert("med-edit-title", ("Edit Medicine", "ওষুধ সম্পাদনা"));
    map.insert("med-image-search", ("Search by Image", "ছবি দিয়ে খুঁজুন"));
    map.insert("med-total", ("Total", "মোট"));
    map.insert("med-none", ("No medicines found", "কোনো ওষুধ পাওয়া যায়নি"));
    map.insert("med-name", ("Name", "নাম"));
    map.insert("med-name-bn", ("Name (Bangla)", "নাম (বাংলা)"));
    map.insert("med-brand", ("Brand", "ব্র্যান্ড"));
    map.insert("med-brand-bn", ("Brand (Bangla)", "ব্র্যান্ড (বাংলা)"));
    map.insert("med-origin", ("Origin", "উৎস"));
    map.insert("med-origin-bn", ("Origin (Bangla)", "উৎস (বাংলা)"));
    map.insert("med-details", ("Details", "বিবরণ"));
    map.insert("med-details-bn", ("Details (Bangla)", "বিবরণ (বাংলা)"));
    map.insert("med-usage", ("Usage", "ব্যবহার"));
    map.insert("med-usage-bn", ("Usage (Bangla)", "ব্যবহার (বাংলা)"));
    map.insert("med-how-to-use", ("How To Use", "ব্যবহারবিধি"));
    map.insert("med-how-to-use-bn", ("How To Use (Bangla)", "ব্যবহারবিধি (বাংলা)"));
    map.insert("med-side-effects", ("Side Effects", "পার্শ্বপ্রতিক্রিয়া"));
    map.insert(
        "med-side-effects-bn",
        ("Side Effects (Bangla)", "পার্শ্বপ্রতিক্রিয়া (বাংলা)"),
    );
    map.insert("med-image", ("Image", "ছবি"));
    map.insert(
        "med-no-images",
        ("No images available", "কোনো ছবি নেই"),
    );
    map.insert("med-added", ("Added On", "যোগের তারিখ"));
    map.insert("med-dosage", ("Dosage", "ডোজ"));
    map.insert("med-type", ("Type", "ধরন"));
    map.insert(
        "med-image-paths",
        (
            "Image files (separate paths with ;)",
            "ছবির ফাইল (; দিয়ে পথ আলাদা করুন)",
        ),
    );
    map.insert(
        "med-delete-confirm",
        ("Delete this medicine?", "এই ওষুধটি মুছে ফেলবেন?"),
    );
    map.insert(
        "med-image-delete-confirm",
        ("Delete this image?", "এই ছবিটি মুছে ফেলবেন?"),
    );

    // Image search dialog
    map.insert("search-title", ("Search by Image", "ছবি দিয়ে খুঁজুন"));
    map.insert("search-file", ("Image file path", "ছবির ফাইলের পথ"));
    map.insert("search-run", ("Search", "খুঁজুন"));
    map.insert("search-searching", ("Searching...", "খোঁজা হচ্ছে..."));
    map.insert("search-results", ("Results", "ফলাফল"));
    map.insert(
        "search-no-match",
        ("No matching medicines found", "মিলে যাওয়া কোনো ওষুধ পাওয়া যায়নি"),
    );
    map.insert("search-similarity", ("Similarity", "সাদৃশ্য"));
    map.insert(
        "search-tips-title",
        ("Tips for best results", "সেরা ফলাফলের জন্য পরামর্শ"),
    );
    map.insert(
        "search-tips",
        (
            "Use a clear, well-lit photo of the medicine strip or box. JPG, PNG, GIF and WEBP up to 5MB.",
            "ওষুধের স্ট্রিপ বা বাক্সের পরিষ্কার, আলোকিত ছবি ব্যবহার করুন। সর্বোচ্চ ৫ এমবি JPG, PNG, GIF, WEBP।",
        ),
    );
    map.insert(
        "search-found",
        ("Found {n} matching medicine(s)", "{n}টি মিলে যাওয়া ওষুধ পাওয়া গেছে"),
    );

    // Users page
    map.insert("users-title", ("Users", "ব্যবহারকারী"));
    map.insert(
        "users-search-placeholder",
        ("Search by name or email...", "নাম বা ইমেইল দিয়ে খুঁজুন..."),
    );
    map.insert("users-regular", ("Regular Users", "সাধারণ ব্যবহারকারী"));
    map.insert("users-admins", ("Admins", "অ্যাডমিন"));
    map.insert("users-none", ("No users found", "কোনো ব্যবহারকারী পাওয়া যায়নি"));
    map.insert("users-edit-title", ("Edit User", "ব্যবহারকারী সম্পাদনা"));
    map.insert("users-role", ("Role", "ভূমিকা"));
    map.insert("users-role-admin", ("Admin", "অ্যাডমিন"));
    map.insert("users-role-user", ("User", "ব্যবহারকারী"));
    map.insert("users-all-roles", ("All Roles", "সব ভূমিকা"));
    map.insert("users-location", ("Location", "অবস্থান"));
    map.insert("users-bio", ("Bio", "পরিচিতি"));
    map.insert(
        "users-delete-confirm",
        ("Delete this user?", "এই ব্যবহারকারীকে মুছে ফেলবেন?"),
    );

    // Profile page
    map.insert("profile-save", ("Save Changes", "পরিবর্তন সংরক্ষণ"));
    map.insert("profile-photo", ("Profile Photo", "প্রোফাইল ছবি"));
    map.insert("profile-cover", ("Cover Photo", "কভার ছবি"));
    map.insert("profile-name", ("Full Name", "পুরো নাম"));
    map.insert("profile-email", ("Email Address", "ইমেইল ঠিকানা"));
    map.insert(
        "profile-email-hint",
        (
            "Email cannot be changed for security reasons",
            "নিরাপত্তার কারণে ইমেইল পরিবর্তন করা যায় না",
        ),
    );
    map.insert("profile-phone", ("Phone", "ফোন"));
    map.insert("profile-gender", ("Gender", "লিঙ্গ"));
    map.insert("profile-dob", ("Date of Birth", "জন্ম তারিখ"));
    map.insert("gender-unspecified", ("Not specified", "উল্লেখ নেই"));
    map.insert("gender-male", ("Male", "পুরুষ"));
    map.insert("gender-female", ("Female", "নারী"));
    map.insert("gender-other", ("Other", "অন্যান্য"));

    // Table columns
    map.insert("col-name", ("Name", "নাম"));
    map.insert("col-email", ("Email", "ইমেইল"));
    map.insert("col-phone", ("Phone", "ফোন"));
    map.insert("col-role", ("Role", "ভূমিকা"));
    map.insert("col-joined", ("Joined", "যোগদান"));
    map.insert("col-brand", ("Brand", "ব্র্যান্ড"));
    map.insert("col-origin", ("Origin", "উৎস"));
    map.insert("col-details", ("Details", "বিবরণ"));
    map.insert("col-actions", ("Actions", "কাজ"));

    // Connection indicators
    map.insert("connection-api", ("API", "এপিআই"));
    map.insert("connection-search", ("Image Search", "ছবি অনুসন্ধান"));

    // Log panel
    map.insert("log-title", ("Activity", "কার্যক্রম"));
    map.insert("log-clear", ("Clear", "মুছুন"));

    // Table
    map.insert("table-loading", ("Loading...", "লোড হচ্ছে..."));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, bn)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::BnBD => SharedString::from(bn),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

/// Translate a key containing an `{n}` placeholder
pub fn t_count(locale: Locale, key: &str, count: i64) -> SharedString {
    let template = t(locale, key);
    SharedString::from(template.replace("{n}", &count.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_locales() {
        assert_eq!(t(Locale::EnUS, "nav-medicines"), "Medicines");
        assert_eq!(t(Locale::BnBD, "nav-medicines"), "ওষুধ");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::EnUS, "no-such-key"), "no-such-key");
    }

    #[test]
    fn test_count_substitution() {
        assert_eq!(
            t_count(Locale::EnUS, "search-found", 3),
            "Found 3 matching medicine(s)"
        );
    }

    #[test]
    fn test_locale_codes_round_trip() {
        assert_eq!(Locale::from_code("bn"), Locale::BnBD);
        assert_eq!(Locale::from_code("en"), Locale::EnUS);
        assert_eq!(Locale::from_code("fr"), Locale::EnUS);
        assert_eq!(Locale::from_code(Locale::BnBD.as_code()), Locale::BnBD);
    }
}
