//! Search box and select filters above the candidate table.

use dioxus::prelude::*;
use tracker_core::{
    ALL_OPTION, CandidateFilter, CandidateStatus, Department, DepartmentFilter, StatusFilter,
};

/// Props for FilterBar component.
#[derive(Props, Clone, PartialEq)]
pub struct FilterBarProps {
    /// Filters currently applied.
    pub filter: CandidateFilter,
    pub on_search: EventHandler<String>,
    pub on_status: EventHandler<StatusFilter>,
    pub on_department: EventHandler<DepartmentFilter>,
    pub on_reset: EventHandler<()>,
}

#[component]
pub fn FilterBar(props: FilterBarProps) -> Element {
    let status_value = props.filter.status.select_value();
    let department_value = props.filter.department.select_value();
    let on_status = props.on_status;
    let on_department = props.on_department;

    rsx! {
        div { class: "filter-bar",
            input {
                class: "filter-search",
                r#type: "search",
                placeholder: "Search by name or email",
                value: "{props.filter.search}",
                oninput: move |e| props.on_search.call(e.value()),
            }

            select {
                class: "filter-select",
                value: "{status_value}",
                onchange: move |e| match StatusFilter::from_select(&e.value()) {
                    Ok(status) => on_status.call(status),
                    Err(err) => tracing::warn!("Ignoring status filter: {}", err),
                },
                option { value: ALL_OPTION, selected: status_value == ALL_OPTION, "All statuses" }
                for status in CandidateStatus::ALL {
                    option {
                        value: status.as_str(),
                        selected: status_value == status.as_str(),
                        "{status}"
                    }
                }
            }

            select {
                class: "filter-select",
                value: "{department_value}",
                onchange: move |e| match DepartmentFilter::from_select(&e.value()) {
                    Ok(department) => on_department.call(department),
                    Err(err) => tracing::warn!("Ignoring department filter: {}", err),
                },
                option { value: ALL_OPTION, selected: department_value == ALL_OPTION, "All departments" }
                for department in Department::ALL {
                    option {
                        value: department.as_str(),
                        selected: department_value == department.as_str(),
                        "{department}"
                    }
                }
            }

            button {
                class: "btn btn-secondary",
                disabled: props.filter.is_default(),
                onclick: move |_| props.on_reset.call(()),
                "Reset"
            }
        }
    }
}
