use crate::shared::icons::icon;
use leptos::prelude::*;

/// Position inside a paged list; pages are 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: usize,
    pub pages: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    First,
    Previous,
    Next,
    Last,
}

impl Step {
    const ALL: [Step; 4] = [Step::First, Step::Previous, Step::Next, Step::Last];

    fn icon(self) -> &'static str {
        match self {
            Step::First => "chevrons-left",
            Step::Previous => "chevron-left",
            Step::Next => "chevron-right",
            Step::Last => "chevrons-right",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Step::First => "Primera página",
            Step::Previous => "Página anterior",
            Step::Next => "Página siguiente",
            Step::Last => "Última página",
        }
    }
}

impl Pager {
    pub fn new(page: usize, pages: usize) -> Self {
        Self {
            page,
            pages: pages.max(1),
        }
    }

    /// Page reached by `step`, or `None` when the button should be disabled
    fn target(self, step: Step) -> Option<usize> {
        let last = self.pages - 1;
        match step {
            Step::First | Step::Previous if self.page == 0 => None,
            Step::Next | Step::Last if self.page >= last => None,
            Step::First => Some(0),
            Step::Previous => Some(self.page - 1),
            Step::Next => Some(self.page + 1),
            Step::Last => Some(last),
        }
    }

    /// "2 / 5 (43)"
    pub fn label(self, total_count: usize) -> String {
        format!("{} / {} ({})", self.page + 1, self.pages, total_count)
    }
}

/// First/previous/next/last pager with "page / total (rows)" info
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)]
    total_pages: Signal<usize>,
    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let pager = move || Pager::new(current_page.get(), total_pages.get());

    let step_button = move |step: Step| {
        view! {
            <button
                class="pagination-btn"
                title=step.title()
                disabled=move || pager().target(step).is_none()
                on:click=move |_| {
                    if let Some(page) = pager().target(step) {
                        on_page_change.run(page);
                    }
                }
            >
                {icon(step.icon())}
            </button>
        }
    };

    let [first, previous, next, last] = Step::ALL;

    view! {
        <div class="pagination-controls">
            {step_button(first)}
            {step_button(previous)}
            <span class="pagination-info">{move || pager().label(total_count.get())}</span>
            {step_button(next)}
            {step_button(last)}
        </div>
    }
}
