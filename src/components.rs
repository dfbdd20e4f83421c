//! Yew view for the creative-works list on the /creatives page.
//!
//! The rest of the page is server-rendered markup; this is the one piece
//! whose content comes from the backend, so it is rendered as a component
//! mounted into `#creative-list`.

use log::error;
use portfolio_interactions::api::{fetch_creative_works, ApiError, CreativeWork};
use portfolio_interactions::config::{CREATIVES_EMPTY, CREATIVES_FAILED, CREATIVES_LOADING};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// What the list currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum CreativeListState {
    Loading,
    Empty,
    Loaded(Rc<Vec<CreativeWork>>),
    Failed,
}

impl CreativeListState {
    pub fn from_result(result: Result<Vec<CreativeWork>, ApiError>) -> Self {
        match result {
            Ok(works) if works.is_empty() => CreativeListState::Empty,
            Ok(works) => CreativeListState::Loaded(Rc::new(works)),
            Err(_) => CreativeListState::Failed,
        }
    }

    /// `(title, href)` of every link the list renders.
    pub fn links(&self) -> Vec<(&str, &str)> {
        match self {
            CreativeListState::Loaded(works) => works
                .iter()
                .map(|w| (w.title.as_str(), w.url.as_str()))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// The status line shown instead of links, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            CreativeListState::Loading => Some(CREATIVES_LOADING),
            CreativeListState::Empty => Some(CREATIVES_EMPTY),
            CreativeListState::Loaded(_) => None,
            CreativeListState::Failed => Some(CREATIVES_FAILED),
        }
    }

    /// CSS classes for the status line; failures are styled as errors.
    pub fn message_class(&self) -> &'static str {
        match self {
            CreativeListState::Failed => "empty-list-message error",
            _ => "empty-list-message",
        }
    }
}

/// Renders the list body for a given state.
pub fn render_creative_list(state: &CreativeListState) -> Html {
    if let Some(message) = state.message() {
        return html! {
            <p class={state.message_class()}>{ message }</p>
        };
    }
    state
        .links()
        .into_iter()
        .map(|(title, href)| {
            html! {
                <a class="creative-list-item"
                    href={href.to_string()}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    { title.to_string() }
                </a>
            }
        })
        .collect::<Html>()
}

/// Fetches the creative works once on mount and renders them.
#[function_component(CreativeList)]
pub fn creative_list() -> Html {
    let state = use_state(|| CreativeListState::Loading);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = fetch_creative_works().await;
                if let Err(e) = &result {
                    error!("Error fetching creative works: {}", e);
                }
                state.set(CreativeListState::from_result(result));
            });
            || ()
        });
    }

    render_creative_list(&state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_response_shows_empty_state() {
        let state = CreativeListState::from_result(Ok(Vec::new()));
        assert_eq!(state, CreativeListState::Empty);
        assert_eq!(state.message(), Some(CREATIVES_EMPTY));
        assert_eq!(state.message_class(), "empty-list-message");
        assert!(state.links().is_empty());
    }

    #[test]
    fn failure_shows_error_message() {
        let state = CreativeListState::from_result(Err(ApiError::Network("offline".into())));
        assert_eq!(state, CreativeListState::Failed);
        assert_eq!(state.message(), Some(CREATIVES_FAILED));
        assert_eq!(state.message_class(), "empty-list-message error");
        assert!(state.links().is_empty());

        let state = CreativeListState::from_result(Err(ApiError::Status {
            code: 500,
            text: "Internal Server Error".into(),
        }));
        assert_eq!(state, CreativeListState::Failed);
    }

    #[test]
    fn single_work_renders_one_link() {
        let state = CreativeListState::from_result(Ok(vec![CreativeWork {
            title: "X".into(),
            url: "http://x".into(),
        }]));
        assert_eq!(state.links(), vec![("X", "http://x")]);
        assert_eq!(state.message(), None);
    }

    #[test]
    fn loading_until_the_response_arrives() {
        assert_eq!(CreativeListState::Loading.message(), Some(CREATIVES_LOADING));
    }
}
