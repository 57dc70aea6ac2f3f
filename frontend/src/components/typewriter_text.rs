use yew::prelude::*;

use crate::config;
use crate::typewriter::machine::{RevealFrame, Typewriter, CURSOR};
use crate::typewriter::session::RevealSession;
use crate::typewriter::timer::IntervalScheduler;

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub text: AttrValue,
}

/// Last frame pushed by the session, tagged with the text it belongs to.
#[derive(Clone, PartialEq)]
struct Shown {
    source: AttrValue,
    frame: RevealFrame,
}

impl Shown {
    fn initial(source: &AttrValue) -> Self {
        Shown {
            source: source.clone(),
            frame: Typewriter::new(source.as_str()).frame(),
        }
    }

    fn is_finished_for(&self, text: &AttrValue) -> bool {
        self.source == *text && !self.frame.cursor
    }
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let shown = use_state(|| Shown::initial(&props.text));
    let finished = shown.is_finished_for(&props.text);

    // One session per text. Once the reveal finishes the deps change and the
    // session is dropped, which releases the interval.
    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |(text, finished)| {
                let session = (!*finished).then(|| {
                    let source = text.clone();
                    RevealSession::start(
                        text.as_str(),
                        &IntervalScheduler,
                        config::REVEAL_INTERVAL_MS,
                        move |frame| {
                            shown.set(Shown {
                                source: source.clone(),
                                frame,
                            })
                        },
                    )
                });
                move || drop(session)
            },
            (props.text.clone(), finished),
        );
    }

    // A text change renders once with the old frame before the new session
    // resets it; hide that frame instead of showing the wrong string.
    let frame = if shown.source == props.text {
        shown.frame.clone()
    } else {
        Shown::initial(&props.text).frame
    };

    html! {
        <span class="typewriter">
            { frame.text }
            {
                if frame.cursor {
                    html! { <span class="typewriter-cursor">{ CURSOR.to_string() }</span> }
                } else {
                    html! {}
                }
            }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(text: &'static str, ticks: usize) -> Shown {
        let mut typewriter = Typewriter::new(text);
        for _ in 0..ticks {
            typewriter.tick();
        }
        Shown {
            source: AttrValue::from(text),
            frame: typewriter.frame(),
        }
    }

    #[test]
    fn not_finished_while_cursor_is_shown() {
        let text = AttrValue::from("Hi");
        assert!(!played("Hi", 0).is_finished_for(&text));
        assert!(!played("Hi", 1).is_finished_for(&text));
    }

    #[test]
    fn finished_on_final_frame_of_same_text() {
        assert!(played("Hi", 2).is_finished_for(&AttrValue::from("Hi")));
    }

    #[test]
    fn frame_of_another_text_is_not_finished() {
        assert!(!played("Hi", 2).is_finished_for(&AttrValue::from("Hello")));
    }

    #[test]
    fn empty_text_is_finished_from_the_start() {
        let text = AttrValue::from("");
        assert!(Shown::initial(&text).is_finished_for(&text));
    }
}
