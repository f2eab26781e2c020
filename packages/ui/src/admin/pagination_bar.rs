//! Page navigation below the candidate table.

use dioxus::prelude::*;
use tracker_core::Pagination;

/// Props for PaginationBar component.
#[derive(Props, Clone, PartialEq)]
pub struct PaginationBarProps {
    pub pagination: Pagination,
    /// Called with the 1-based page to show.
    pub on_page: EventHandler<usize>,
}

#[component]
pub fn PaginationBar(props: PaginationBarProps) -> Element {
    let pagination = props.pagination;
    let on_page = props.on_page;
    let page = pagination.page();

    rsx! {
        div { class: "pagination",
            span { class: "pagination-summary",
                "Showing {pagination.first_shown()} to {pagination.last_shown()} of {pagination.total()} results"
            }

            div { class: "pagination-controls",
                button {
                    class: "btn btn-small btn-secondary",
                    disabled: !pagination.has_previous(),
                    onclick: move |_| on_page.call(page - 1),
                    "Previous"
                }
                for number in 1..=pagination.page_count() {
                    button {
                        key: "{number}",
                        class: if number == page { "btn btn-small btn-primary" } else { "btn btn-small btn-secondary" },
                        onclick: move |_| on_page.call(number),
                        "{number}"
                    }
                }
                button {
                    class: "btn btn-small btn-secondary",
                    disabled: !pagination.has_next(),
                    onclick: move |_| on_page.call(page + 1),
                    "Next"
                }
            }
        }
    }
}
