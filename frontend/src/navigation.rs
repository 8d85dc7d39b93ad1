//! Current-page state, browser history sync and per-page document metadata.
//!
//! The app root owns the current [`Page`] through [`NavigationProvider`]; everything
//! below it reads the page and a `navigate` callback from [`NavContext`].

use std::rc::Rc;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::PopStateEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Finance,
    Logistics,
    Operations,
    Contact,
    Privacy,
    Terms,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Finance,
        Page::Logistics,
        Page::Operations,
        Page::Contact,
        Page::Privacy,
        Page::Terms,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Finance => "finance",
            Page::Logistics => "logistics",
            Page::Operations => "operations",
            Page::Contact => "contact",
            Page::Privacy => "privacy",
            Page::Terms => "terms",
        }
    }

    pub fn from_id(id: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.id() == id)
    }

    /// Address-bar path pushed when this page becomes current.
    pub fn path(self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::Contact => "/contact".to_string(),
            Page::Privacy => "/legal/privacy".to_string(),
            Page::Terms => "/legal/terms".to_string(),
            Page::Finance | Page::Logistics | Page::Operations => {
                format!("/solutions/{}", self.id())
            }
        }
    }

    pub fn meta(self) -> PageMeta {
        match self {
            Page::Home => PageMeta {
                title: "AventeqAI | Enterprise AI Infrastructure",
                description: "Custom AI Infrastructure Built for Measurable Business Growth. Stop experimenting and start scaling with production-ready AI systems.",
            },
            Page::Finance => PageMeta {
                title: "Financial Ops Layer | AventeqAI",
                description: "Eliminate manual workflows and uncover hidden insights. Build custom, high-fidelity AI systems that integrate directly into your financial stack.",
            },
            Page::Logistics => PageMeta {
                title: "Logistics AI Engine | AventeqAI",
                description: "Accelerate operational velocity with outcome-driven logistics AI. Predict bottlenecks, optimize routes, and automate global trade.",
            },
            Page::Operations => PageMeta {
                title: "Programmable Ops | AventeqAI",
                description: "Programmable AI systems engineered to automate operational complexity. Integrate across your entire stack to eliminate bottlenecks.",
            },
            Page::Contact => PageMeta {
                title: "Start Building | AventeqAI",
                description: "Book a free strategy call to identify where AI can deliver the greatest impact across your business.",
            },
            Page::Privacy => PageMeta {
                title: "Privacy Policy | AventeqAI",
                description: "How AventeqAI collects, uses, and protects your data and AI model training information.",
            },
            Page::Terms => PageMeta {
                title: "Terms of Service | AventeqAI",
                description: "Terms and conditions governing the use of AventeqAI infrastructure and consultancy services.",
            },
        }
    }
}

/// State attached to every history entry we push: `{ page: "<id>" }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryState {
    #[serde(default)]
    pub page: Option<String>,
}

impl HistoryState {
    pub fn for_page(page: Page) -> Self {
        Self {
            page: Some(page.id().to_string()),
        }
    }

    /// Page carried by the entry, or Home when the entry is ours but unrecognised.
    pub fn page(&self) -> Page {
        self.page
            .as_deref()
            .and_then(Page::from_id)
            .unwrap_or(Page::Home)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("document has no <head>")]
    NoHead,
    #[error("browser rejected the call: {0}")]
    Js(String),
}

impl From<JsValue> for ShellError {
    fn from(value: JsValue) -> Self {
        ShellError::Js(format!("{:?}", value))
    }
}

/// Browser side effects driven by navigation.
pub trait BrowserShell {
    fn push_history(&self, state: &HistoryState, path: &str) -> Result<(), ShellError>;
    fn set_title(&self, title: &str) -> Result<(), ShellError>;
    fn set_description(&self, description: &str) -> Result<(), ShellError>;
    fn scroll_to_origin(&self);
}

pub struct WebShell;

impl WebShell {
    fn window() -> Result<web_sys::Window, ShellError> {
        web_sys::window().ok_or(ShellError::NoWindow)
    }

    fn document() -> Result<web_sys::Document, ShellError> {
        Self::window()?.document().ok_or(ShellError::NoDocument)
    }
}

impl BrowserShell for WebShell {
    fn push_history(&self, state: &HistoryState, path: &str) -> Result<(), ShellError> {
        let history = Self::window()?.history()?;
        let data = serde_wasm_bindgen::to_value(state).map_err(|e| ShellError::Js(e.to_string()))?;
        history.push_state_with_url(&data, "", Some(path))?;
        Ok(())
    }

    fn set_title(&self, title: &str) -> Result<(), ShellError> {
        Self::document()?.set_title(title);
        Ok(())
    }

    fn set_description(&self, description: &str) -> Result<(), ShellError> {
        let document = Self::document()?;
        let meta = match document.query_selector("meta[name='description']")? {
            Some(meta) => meta,
            None => {
                let meta = document.create_element("meta")?;
                meta.set_attribute("name", "description")?;
                document
                    .head()
                    .ok_or(ShellError::NoHead)?
                    .append_child(&meta)?;
                meta
            }
        };
        meta.set_attribute("content", description)?;
        Ok(())
    }

    fn scroll_to_origin(&self) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Side effects of an explicit navigation request. Returns the page that is now current;
/// a rejected history push is logged and otherwise ignored.
pub fn navigate<S: BrowserShell + ?Sized>(shell: &S, target: Page) -> Page {
    shell.scroll_to_origin();
    let path = target.path();
    if let Err(e) = shell.push_history(&HistoryState::for_page(target), &path) {
        warn!("Navigation URL update suppressed ({}): {}", path, e);
    }
    info!("Navigated to {}", target.id());
    target
}

/// Title, description and scroll reset for the page that just became current.
pub fn apply_page_metadata<S: BrowserShell + ?Sized>(shell: &S, page: Page) {
    let meta = page.meta();
    if let Err(e) = shell.set_title(meta.title) {
        debug!("Skipping title update: {}", e);
    }
    if let Err(e) = shell.set_description(meta.description) {
        debug!("Skipping description update: {}", e);
    }
    shell.scroll_to_origin();
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    pub current: Page,
}

impl Default for NavState {
    fn default() -> Self {
        Self { current: Page::Home }
    }
}

pub enum NavAction {
    Navigate(Page),
    /// Back/forward. `None` when the entry carries no state we can read.
    Popped(Option<HistoryState>),
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::Navigate(page) => page,
            NavAction::Popped(state) => state.map(|s| s.page()).unwrap_or(Page::Home),
        };
        if next == self.current {
            self
        } else {
            Rc::new(NavState { current: next })
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct NavContext {
    pub current: Page,
    pub navigate: Callback<Page>,
}

#[derive(Properties, PartialEq)]
pub struct NavigationProviderProps {
    pub children: Children,
}

#[function_component(NavigationProvider)]
pub fn navigation_provider(props: &NavigationProviderProps) -> Html {
    let state = use_reducer_eq(NavState::default);

    let navigate = {
        let dispatcher = state.dispatcher();
        use_callback(
            move |target: Page, _| {
                let next = navigate(&WebShell, target);
                dispatcher.dispatch(NavAction::Navigate(next));
            },
            (),
        )
    };

    {
        let dispatcher = state.dispatcher();
        use_event_with_window("popstate", move |e: PopStateEvent| {
            let entry = serde_wasm_bindgen::from_value::<HistoryState>(e.state()).ok();
            debug!("popstate with {:?}", entry);
            dispatcher.dispatch(NavAction::Popped(entry));
        });
    }

    // Runs once per change of the current page, not once per render.
    use_effect_with_deps(
        move |page| {
            apply_page_metadata(&WebShell, *page);
            || ()
        },
        state.current,
    );

    let context = NavContext {
        current: state.current,
        navigate,
    };

    html! {
        <ContextProvider<NavContext> {context}>
            { for props.children.iter() }
        </ContextProvider<NavContext>>
    }
}

#[hook]
pub fn use_nav() -> NavContext {
    use_context::<NavContext>().unwrap_or_else(|| NavContext {
        current: Page::Home,
        navigate: Callback::noop(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, PartialEq)]
    enum Call {
        Push(Option<String>, String),
        Title(String),
        Description(String),
        Scroll,
    }

    #[derive(Default)]
    struct RecordingShell {
        calls: RefCell<Vec<Call>>,
        reject_history: bool,
        reject_metadata: bool,
    }

    impl BrowserShell for RecordingShell {
        fn push_history(&self, state: &HistoryState, path: &str) -> Result<(), ShellError> {
            if self.reject_history {
                return Err(ShellError::Js("SecurityError".to_string()));
            }
            self.calls
                .borrow_mut()
                .push(Call::Push(state.page.clone(), path.to_string()));
            Ok(())
        }

        fn set_title(&self, title: &str) -> Result<(), ShellError> {
            if self.reject_metadata {
                return Err(ShellError::NoDocument);
            }
            self.calls.borrow_mut().push(Call::Title(title.to_string()));
            Ok(())
        }

        fn set_description(&self, description: &str) -> Result<(), ShellError> {
            if self.reject_metadata {
                return Err(ShellError::NoHead);
            }
            self.calls
                .borrow_mut()
                .push(Call::Description(description.to_string()));
            Ok(())
        }

        fn scroll_to_origin(&self) {
            self.calls.borrow_mut().push(Call::Scroll);
        }
    }

    fn reduce(state: NavState, action: NavAction) -> Rc<NavState> {
        Rc::new(state).reduce(action)
    }

    #[test]
    fn paths_follow_the_fixed_mapping() {
        assert_eq!(Page::Home.path(), "/");
        assert_eq!(Page::Contact.path(), "/contact");
        assert_eq!(Page::Privacy.path(), "/legal/privacy");
        assert_eq!(Page::Terms.path(), "/legal/terms");
        assert_eq!(Page::Finance.path(), "/solutions/finance");
        assert_eq!(Page::Logistics.path(), "/solutions/logistics");
        assert_eq!(Page::Operations.path(), "/solutions/operations");
    }

    #[test]
    fn ids_resolve_back_to_their_page() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), Some(page));
        }
        assert_eq!(Page::from_id("pricing"), None);
        assert_eq!(Page::from_id("Home"), None);
    }

    #[test]
    fn every_page_has_distinct_metadata() {
        let titles: std::collections::HashSet<_> =
            Page::ALL.iter().map(|p| p.meta().title).collect();
        assert_eq!(titles.len(), Page::ALL.len());
        assert_eq!(
            Page::Home.meta().title,
            "AventeqAI | Enterprise AI Infrastructure"
        );
        assert!(Page::ALL.iter().all(|p| !p.meta().description.is_empty()));
    }

    #[test]
    fn navigate_pushes_state_and_path() {
        for page in Page::ALL {
            let shell = RecordingShell::default();
            assert_eq!(navigate(&shell, page), page);
            assert_eq!(
                *shell.calls.borrow(),
                vec![
                    Call::Scroll,
                    Call::Push(Some(page.id().to_string()), page.path()),
                ]
            );
        }
    }

    #[test]
    fn rejected_history_push_still_navigates() {
        let shell = RecordingShell {
            reject_history: true,
            ..Default::default()
        };
        assert_eq!(navigate(&shell, Page::Terms), Page::Terms);
        assert_eq!(*shell.calls.borrow(), vec![Call::Scroll]);
    }

    #[test]
    fn metadata_comes_from_the_table() {
        for page in Page::ALL {
            let shell = RecordingShell::default();
            apply_page_metadata(&shell, page);
            let meta = page.meta();
            assert_eq!(
                *shell.calls.borrow(),
                vec![
                    Call::Title(meta.title.to_string()),
                    Call::Description(meta.description.to_string()),
                    Call::Scroll,
                ]
            );
        }
    }

    #[test]
    fn metadata_failures_are_swallowed() {
        let shell = RecordingShell {
            reject_metadata: true,
            ..Default::default()
        };
        apply_page_metadata(&shell, Page::Finance);
        assert_eq!(*shell.calls.borrow(), vec![Call::Scroll]);
    }

    #[test]
    fn navigate_action_sets_current_page() {
        for page in Page::ALL {
            let next = reduce(NavState::default(), NavAction::Navigate(page));
            assert_eq!(next.current, page);
        }
    }

    #[test]
    fn pop_with_known_page_restores_it() {
        let next = reduce(
            NavState::default(),
            NavAction::Popped(Some(HistoryState::for_page(Page::Logistics))),
        );
        assert_eq!(next.current, Page::Logistics);
    }

    #[test]
    fn pop_without_usable_state_falls_back_home() {
        let start = NavState {
            current: Page::Contact,
        };
        assert_eq!(
            reduce(start.clone(), NavAction::Popped(None)).current,
            Page::Home
        );
        assert_eq!(
            reduce(start.clone(), NavAction::Popped(Some(HistoryState::default()))).current,
            Page::Home
        );
        let unknown = HistoryState {
            page: Some("pricing".to_string()),
        };
        assert_eq!(reduce(start, NavAction::Popped(Some(unknown))).current, Page::Home);
    }

    #[test]
    fn repeated_pops_keep_the_same_state() {
        let first = reduce(
            NavState::default(),
            NavAction::Popped(Some(HistoryState::for_page(Page::Privacy))),
        );
        let second = first
            .clone()
            .reduce(NavAction::Popped(Some(HistoryState::for_page(Page::Privacy))));
        assert!(Rc::ptr_eq(&first, &second));
    }
}
