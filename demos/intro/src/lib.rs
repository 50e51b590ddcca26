//! Two ways of writing a component: a plain render function without any state,
//! and a stateful view owning the text of a controlled input.

use kobold_lite::prelude::*;
use log::debug;
use web_sys::HtmlInputElement;

pub const HEADING: &str = "React Intro";

/// Fixed greeting, renders the same heading every time.
pub struct StaticGreeting;

impl StaticGreeting {
    pub fn render(self) -> impl View {
        div(h1(HEADING))
    }
}

/// State owned by [`EchoInput`](EchoInput).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputState {
    pub user_input: String,
}

impl InputState {
    /// Store the new value of the field, logging it first.
    ///
    /// Events without a usable value clear the stored text.
    pub fn on_change<E: TargetValue>(&mut self, event: E) {
        let value = event.target_value().unwrap_or_default();

        debug!(target: "intro::echo", "{value}");

        self.user_input = value;
    }
}

/// Heading and a text field echoing everything typed into it.
pub struct EchoInput;

impl EchoInput {
    pub fn render(self) -> impl View {
        stateful(InputState::default, echo)
    }

    /// Same as [`render`](EchoInput::render), handing a [`Link`](Link) to the
    /// state over to `handler` once the view is built.
    pub fn render_linked<H>(self, handler: H) -> impl View
    where
        H: FnOnce(Link<InputState>),
    {
        stateful(InputState::default, echo).once(handler)
    }
}

fn echo(state: &InputState, link: Link<InputState>) -> impl View {
    let onchange = link.callback(|state: &mut InputState, event: Event<HtmlInputElement>| {
        state.on_change(event)
    });

    div((
        Static(h1(HEADING)),
        input()
            .value(state.user_input.clone())
            .on_input(onchange),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, Once};

    use kobold_lite::render_to_string;
    use kobold_lite::stateful::Headless;
    use log::{Log, Metadata, Record};

    use super::*;

    /// Change event that doesn't need a browser.
    struct Change(Option<&'static str>);

    impl TargetValue for Change {
        fn target_value(&self) -> Option<String> {
            self.0.map(String::from)
        }
    }

    struct Capture(Mutex<Vec<String>>);

    impl Log for Capture {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.target() == "intro::echo"
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                if let Ok(mut records) = self.0.lock() {
                    records.push(record.args().to_string());
                }
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    fn captured() -> Vec<String> {
        static INIT: Once = Once::new();

        INIT.call_once(|| {
            log::set_logger(&CAPTURE).expect("logger is only set once");
            log::set_max_level(log::LevelFilter::Debug);
        });

        CAPTURE.0.lock().map(|records| records.clone()).unwrap_or_default()
    }

    fn user_input(link: &Link<InputState>) -> Option<String> {
        link.with(|state| state.user_input.clone())
    }

    fn change(state: &mut InputState, change: Change) {
        state.on_change(change)
    }

    #[test]
    fn static_greeting_is_one_fixed_heading() {
        for _ in 0..3 {
            let html = render_to_string(StaticGreeting.render());

            assert_eq!(html, "<div><h1>React Intro</h1></div>");
            assert_eq!(html.matches("<h1>").count(), 1);
        }
    }

    #[test]
    fn echo_input_starts_empty() {
        let echo_input = Headless::new(InputState::default, echo);

        assert_eq!(user_input(&echo_input.link()).as_deref(), Some(""));
        assert_eq!(
            render_to_string(EchoInput.render()),
            r#"<div><h1>React Intro</h1><input value=""></div>"#,
        );
    }

    #[test]
    fn linked_render_matches_plain_render() {
        assert_eq!(
            render_to_string(EchoInput.render_linked(|_| ())),
            render_to_string(EchoInput.render()),
        );
    }

    #[test]
    fn change_stores_the_new_value() {
        let echo_input = Headless::new(InputState::default, echo);
        let onchange = echo_input.link().callback(change);

        for value in ["a", "ab", "", "Zażółć gęślą jaźń", "<b>&</b>", "  padded  "] {
            onchange.call(Change(Some(value)));

            assert_eq!(user_input(&echo_input.link()).as_deref(), Some(value));
        }
    }

    #[test]
    fn change_without_value_clears_the_field() {
        let echo_input = Headless::new(InputState::default, echo);
        let onchange = echo_input.link().callback(change);

        onchange.call(Change(Some("typed")));
        onchange.call(Change(None));

        assert_eq!(user_input(&echo_input.link()).as_deref(), Some(""));
    }

    #[test]
    fn rerender_without_change_is_identical() {
        let echo_input = Headless::new(InputState::default, echo);

        assert_eq!(echo_input.render_html(), echo_input.render_html());

        echo_input.link().callback(change).call(Change(Some("<tag>")));

        let first = echo_input.render_html();

        assert_eq!(first, echo_input.render_html());
        assert_eq!(
            first,
            r#"<div><h1>React Intro</h1><input value="&lt;tag&gt;"></div>"#,
        );
    }

    #[test]
    fn detached_handler_updates_its_instance() {
        let echo_input = Headless::new(InputState::default, echo);

        let listener: Box<dyn Listener<Change>> = Box::new(echo_input.link().callback(change));
        let as_fn: Box<dyn Fn(Change)> = Box::new(move |event: Change| listener.handle(event));

        as_fn(Change(Some("detached")));

        assert_eq!(user_input(&echo_input.link()).as_deref(), Some("detached"));
    }

    #[test]
    fn typing_hello() {
        let echo_input = Headless::new(InputState::default, echo);

        captured();

        assert!(echo_input.render_html().contains(r#"<input value="">"#));

        echo_input.link().callback(change).call(Change(Some("hello")));

        assert!(captured().iter().any(|record| record == "hello"));
        assert!(echo_input.render_html().contains(r#"<input value="hello">"#));
    }
}
