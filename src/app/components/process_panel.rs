use dioxus::prelude::*;

use crate::app::components::Card;

/// Illustrative text only: what a real scraping pipeline would do. The
/// simulated search never executes any of these steps.
const WORKFLOW_STEPS: [&str; 5] = [
    "Initialize Selenium WebDriver",
    "Navigate to LinkedIn search",
    "Input search keyword",
    "Extract post metadata",
    "Format and display results",
];

const CODE_SAMPLE: &str = r#"# Python + Selenium
from selenium import webdriver
from selenium.webdriver.common.by import By

driver = webdriver.Chrome()
driver.get("linkedin.com/search")

# Extract post data
posts = driver.find_elements(By.CLASS_NAME, "post")"#;

#[derive(Clone, Copy, PartialEq)]
enum ProcessTab {
    Workflow,
    Code,
}

/// Static "Automation Process" sidebar panel with Workflow/Code tabs.
#[component]
pub fn ProcessPanel() -> Element {
    let mut active_tab = use_signal(|| ProcessTab::Workflow);

    let workflow_class = if active_tab() == ProcessTab::Workflow {
        "c-tabs__trigger c-tabs__trigger--active"
    } else {
        "c-tabs__trigger"
    };
    let code_class = if active_tab() == ProcessTab::Code {
        "c-tabs__trigger c-tabs__trigger--active"
    } else {
        "c-tabs__trigger"
    };

    rsx! {
        Card {
            title: "Automation Process".to_string(),

            div { class: "c-tabs",
                div { class: "c-tabs__list",
                    button {
                        class: "{workflow_class}",
                        onclick: move |_| active_tab.set(ProcessTab::Workflow),
                        "Workflow"
                    }
                    button {
                        class: "{code_class}",
                        onclick: move |_| active_tab.set(ProcessTab::Code),
                        "Code"
                    }
                }

                match active_tab() {
                    ProcessTab::Workflow => rsx! {
                        div { class: "c-process",
                            {WORKFLOW_STEPS.iter().enumerate().map(|(index, step)| {
                                let number = index + 1;
                                rsx! {
                                    div {
                                        key: "{number}",
                                        class: "c-process__step",
                                        span { class: "c-process__step-number", "{number}" }
                                        span { class: "c-process__step-label", "{step}" }
                                    }
                                }
                            })}
                        }
                    },
                    ProcessTab::Code => rsx! {
                        pre { class: "c-process__code",
                            code { "{CODE_SAMPLE}" }
                        }
                    },
                }
            }
        }
    }
}
