//! Accessible FAQ accordion. One panel open per group: opening an item
//! collapses its siblings, clicking the open trigger collapses it again.

use web_sys::MouseEvent;
use yew::prelude::*;

/// Exclusive-open toggle for a group.
pub fn toggle(open: Option<usize>, idx: usize) -> Option<usize> {
    if open == Some(idx) {
        None
    } else {
        Some(idx)
    }
}

#[derive(Clone, PartialEq)]
pub struct AccordionEntry {
    pub question: AttrValue,
    pub answer: Html,
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    /// Group id, used to derive stable panel ids for aria-controls.
    pub id: AttrValue,
    pub items: Vec<AccordionEntry>,
}

#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="accordion" data-accordion={props.id.clone()}>
            { for props.items.iter().enumerate().map(|(idx, entry)| {
                let expanded = *open == Some(idx);
                let panel_id = format!("{}-panel-{}", props.id, idx);
                let onclick = {
                    let open = open.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        open.set(toggle(*open, idx));
                    })
                };
                html! {
                    <div class={classes!("accordion-item", expanded.then_some("open"))}>
                        <button
                            class="accordion-trigger"
                            aria-expanded={if expanded { "true" } else { "false" }}
                            aria-controls={panel_id.clone()}
                            {onclick}
                        >
                            <span class="question-text">{ &entry.question }</span>
                            <span class="toggle-icon">{ if expanded { "−" } else { "+" } }</span>
                        </button>
                        <div class="accordion-panel" id={panel_id} hidden={!expanded}>
                            { entry.answer.clone() }
                        </div>
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::toggle;

    #[test]
    fn opening_an_item_replaces_the_open_sibling() {
        assert_eq!(toggle(None, 2), Some(2));
        assert_eq!(toggle(Some(0), 2), Some(2));
    }

    #[test]
    fn clicking_the_open_item_collapses_it() {
        assert_eq!(toggle(Some(2), 2), None);
    }
}
