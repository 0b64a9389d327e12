//! Users Page
//!
//! Account table with search, role filter, role stats and the editor.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::{Column, DataTable, Pagination, SortDirection};
use crate::components::composite::modal::Modal;
use crate::components::composite::stat_card::StatCard;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::Button;
use crate::components::primitives::select::{select, Select, SelectOption};
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::query::SortOrder;
use crate::domain::user::{User, ROLE_ADMIN, ROLE_USER};
use crate::features::users::controller::UsersController;
use crate::features::users::editor_modal::UserEditorModal;
use crate::i18n::{t, Locale};
use crate::theme::colors::MediColors;
use crate::utils::format::{format_date, format_number};

const ROLE_FILTER_ALL: &str = "all";

/// Users page component
pub struct UsersPage {
    entities: AppEntities,
    controller: Rc<UsersController>,
    search_input: Entity<TextInput>,
    role_select: Entity<Select>,
    table: Entity<DataTable<User>>,
    editor: Option<Entity<UserEditorModal>>,
}

impl UsersPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = Rc::new(UsersController::new(entities.clone()));
        let locale = entities.i18n.read(cx).locale;

        let search_input = text_input(
            "users-search",
            entities.users.read(cx).filter.clone(),
            t(locale, "users-search-placeholder"),
            cx,
        );
        search_input.update(cx, {
            let controller = controller.clone();
            move |input, _| {
                input.on_change(move |value, _window, cx| {
                    controller.set_filter(value.to_string(), cx);
                });
            }
        });

        let role_select = select(
            "role-filter",
            Self::role_options(locale),
            Some(ROLE_FILTER_ALL.to_string()),
            cx,
        );
        role_select.update(cx, {
            let controller = controller.clone();
            move |select, _| {
                select.on_select(move |value, _window, cx| {
                    let role = (value != ROLE_FILTER_ALL).then(|| value.to_string());
                    controller.set_role_filter(role, cx);
                });
            }
        });

        let table = cx.new(|cx| {
            let mut table = DataTable::new(cx);
            table.set_columns(Self::build_columns(locale, &entities, &controller));
            table.on_sort({
                let controller = controller.clone();
                move |column, cx| controller.toggle_sort(column, cx)
            });
            table.on_row_click({
                let controller = controller.clone();
                move |row: &User, cx| controller.open_edit(row, cx)
            });
            table
        });

        cx.observe(&entities.users, |this, _, cx| {
            this.sync_table(cx);
            cx.notify();
        })
        .detach();

        cx.observe(&entities.i18n, |this, _, cx| {
            let locale = this.entities.i18n.read(cx).locale;
            let entities = this.entities.clone();
            let controller = this.controller.clone();
            this.table.update(cx, |table, cx| {
                table.set_columns(Self::build_columns(locale, &entities, &controller));
                cx.notify();
            });
            this.search_input.update(cx, |input, cx| {
                input.set_placeholder(t(locale, "users-search-placeholder"));
                cx.notify();
            });
            this.role_select.update(cx, |select, cx| {
                select.set_options(Self::role_options(locale));
                cx.notify();
            });
            this.sync_table(cx);
            cx.notify();
        })
        .detach();

        controller.refresh(cx);

        let page = Self {
            entities,
            controller,
            search_input,
            role_select,
            table,
            editor: None,
        };
        page.sync_table(cx);
        page
    }

    /// Re-fetch the current page
    pub fn refresh(&self, cx: &mut Context<Self>) {
        self.controller.refresh(cx);
    }

    fn role_options(locale: Locale) -> Vec<SelectOption> {
        vec![
            SelectOption::new(ROLE_FILTER_ALL, t(locale, "users-all-roles")),
            SelectOption::new(ROLE_ADMIN, t(locale, "users-role-admin")),
            SelectOption::new(ROLE_USER, t(locale, "users-role-user")),
        ]
    }

    fn role_label(locale: Locale, role: &str) -> SharedString {
        if role == ROLE_ADMIN {
            t(locale, "users-role-admin")
        } else {
            t(locale, "users-role-user")
        }
    }

    fn build_columns(
        locale: Locale,
        entities: &AppEntities,
        controller: &Rc<UsersController>,
    ) -> Vec<Column<User>> {
        let name_col = Column::new("name", t(locale, "col-name"), |u: &User| {
            div()
                .font_weight(FontWeight::MEDIUM)
                .child(u.name.clone())
                .into_any_element()
        })
        .min_width(120.0)
        .sortable();

        let email_col = Column::new("email", t(locale, "col-email"), |u: &User| {
            div()
                .text_color(MediColors::text_secondary())
                .child(u.email.clone())
                .into_any_element()
        })
        .min_width(160.0)
        .sortable();

        let phone_col = Column::new("phone", t(locale, "col-phone"), |u: &User| {
            div()
                .child(u.phone.clone().unwrap_or_else(|| "-".to_string()))
                .into_any_element()
        })
        .min_width(100.0);

        let role_col = Column::new("role", t(locale, "col-role"), move |u: &User| {
            div()
                .child(Badge::for_role(&u.role, Self::role_label(locale, &u.role)))
                .into_any_element()
        })
        .width(100.0);

        let joined_col = Column::new("createdAt", t(locale, "col-joined"), |u: &User| {
            div()
                .text_color(MediColors::text_secondary())
                .child(
                    u.created_at
                        .as_ref()
                        .map(format_date)
                        .unwrap_or_else(|| "-".to_string()),
                )
                .into_any_element()
        })
        .width(110.0)
        .sortable();

        let edit_label = t(locale, "action-edit");
        let delete_label = t(locale, "action-delete");
        let edit_controller = controller.clone();
        let delete_entities = entities.clone();
        let actions_col = Column::new("actions", t(locale, "col-actions"), move |u: &User| {
            let edit_row = u.clone();
            let delete_row = u.clone();
            let controller = edit_controller.clone();
            let entities = delete_entities.clone();

            div()
                .flex()
                .justify_end()
                .gap_2()
                .child(
                    div()
                        .id(SharedString::from(format!("user-edit-{}", u.id)))
                        .px_2()
                        .py_1()
                        .rounded_sm()
                        .text_size(px(12.0))
                        .text_color(MediColors::accent())
                        .cursor_pointer()
                        .hover(|s| s.bg(MediColors::accent_soft()))
                        .on_click(move |_event, _window, cx| {
                            cx.stop_propagation();
                            controller.open_edit(&edit_row, cx);
                        })
                        .child(edit_label.clone()),
                )
                .child(
                    div()
                        .id(SharedString::from(format!("user-delete-{}", u.id)))
                        .px_2()
                        .py_1()
                        .rounded_sm()
                        .text_size(px(12.0))
                        .text_color(MediColors::danger())
                        .cursor_pointer()
                        .hover(|s| s.bg(gpui::rgba(0xfee2e2ff)))
                        .on_click(move |_event, _window, cx| {
                            cx.stop_propagation();
                            entities.users.update(cx, |users, cx| {
                                users.request_delete(delete_row.clone());
                                cx.notify();
                            });
                        })
                        .child(delete_label.clone()),
                )
                .into_any_element()
        })
        .width(150.0);

        vec![
            name_col, email_col, phone_col, role_col, joined_col, actions_col,
        ]
    }

    fn sync_table(&self, cx: &mut Context<Self>) {
        let locale = self.entities.i18n.read(cx).locale;
        let (rows, loading, sort) = {
            let state = self.entities.users.read(cx);
            let rows: Vec<User> = state.filtered().into_iter().cloned().collect();
            let sort = state.sort_by.clone().map(|column| {
                let direction = match state.sort_order.unwrap_or(SortOrder::Asc) {
                    SortOrder::Asc => SortDirection::Ascending,
                    SortOrder::Desc => SortDirection::Descending,
                };
                (SharedString::from(column), direction)
            });
            (rows, state.loading, sort)
        };

        self.table.update(cx, |table, cx| {
            table.set_rows(rows);
            table.set_loading(loading);
            table.set_sort(sort);
            table.set_empty_message(t(locale, "users-none"));
            table.set_loading_message(t(locale, "table-loading"));
            cx.notify();
        });
    }

    fn render_confirm_delete(
        &self,
        locale: Locale,
        user: &User,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let entities = self.entities.clone();
        let close_entities = self.entities.clone();
        let controller = self.controller.clone();
        let row = user.clone();

        Modal::new(t(locale, "users-delete-confirm"))
            .on_close(move |cx| {
                close_entities.users.update(cx, |users, cx| {
                    users.cancel_delete();
                    cx.notify();
                });
            })
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(FontWeight::MEDIUM)
                            .child(user.name.clone()),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(MediColors::text_secondary())
                            .child(user.email.clone()),
                    ),
            )
            .child(
                div()
                    .flex()
                    .justify_end()
                    .gap_2()
                    .child(
                        Button::secondary("confirm-cancel", t(locale, "action-cancel")).on_click(
                            move |_event: &ClickEvent, _window, cx| {
                                entities.users.update(cx, |users, cx| {
                                    users.cancel_delete();
                                    cx.notify();
                                });
                            },
                        ),
                    )
                    .child(
                        Button::danger("confirm-delete", t(locale, "action-delete")).on_click(
                            cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                                controller.delete(&row, cx);
                            }),
                        ),
                    ),
            )
    }
}

impl Render for UsersPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let (stats, loading, page, total_pages, total, editor_open, confirm_delete) = {
            let state = self.entities.users.read(cx);
            (
                state.role_stats(),
                state.loading,
                state.page,
                state.total_pages,
                state.total,
                state.editing.is_some(),
                state.confirm_delete.clone(),
            )
        };

        if editor_open {
            if self.editor.is_none() {
                let entities = self.entities.clone();
                let controller = self.controller.clone();
                self.editor = Some(cx.new(|cx| UserEditorModal::new(entities, controller, cx)));
            }
        } else {
            self.editor = None;
        }

        let controller = self.controller.clone();

        let mut content = div()
            .size_full()
            .flex()
            .flex_col()
            .gap_4()
            .p_6()
            // Role stats
            .child(
                div()
                    .flex()
                    .gap_4()
                    .child(
                        StatCard::new(
                            t(locale, "users-title"),
                            format_number(stats.total as i64),
                        )
                        .tint(MediColors::stat_blue())
                        .loading(loading),
                    )
                    .child(
                        StatCard::new(
                            t(locale, "users-regular"),
                            format_number(stats.regular as i64),
                        )
                        .tint(MediColors::stat_green())
                        .loading(loading),
                    )
                    .child(
                        StatCard::new(
                            t(locale, "users-admins"),
                            format_number(stats.admins as i64),
                        )
                        .tint(MediColors::stat_purple())
                        .loading(loading),
                    ),
            )
            // Toolbar
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(div().w(px(280.0)).child(self.search_input.clone()))
                    .child(self.role_select.clone())
                    .child(div().flex_1())
                    .child(
                        div()
                            .text_sm()
                            .text_color(MediColors::text_secondary())
                            .child(format!(
                                "{}: {}",
                                t(locale, "med-total"),
                                format_number(total as i64)
                            )),
                    ),
            )
            // Table
            .child(div().flex_1().min_h(px(0.0)).child(self.table.clone()))
            // Pagination
            .child(
                Pagination::new(page, total_pages, total)
                    .items_label(t(locale, "users-title"))
                    .on_page_change(move |page, cx| controller.set_page(page, cx)),
            );

        if let Some(editor) = &self.editor {
            content = content.child(editor.clone());
        }
        if let Some(user) = confirm_delete {
            content = content.child(self.render_confirm_delete(locale, &user, cx));
        }

        content
    }
}
