//! Rotating headline component. One pending timeout at a time, owned here
//! and rescheduled after every state transition.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use hoshikuzu_core::typewriter::Typewriter;

#[derive(Properties, PartialEq)]
pub(crate) struct TypewriterTextProps {
    pub phrases: Vec<String>,
}

#[function_component(TypewriterText)]
pub(crate) fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let display = use_state(String::new);

    {
        let display = display.clone();
        use_effect_with(props.phrases.clone(), move |phrases| {
            let machine = Rc::new(RefCell::new(Typewriter::new(phrases.clone())));
            let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            schedule(machine, Rc::clone(&pending), display, 0);
            move || {
                // Dropping the pending timeout cancels the whole chain.
                pending.borrow_mut().take();
            }
        });
    }

    html! {
        <span class="typewriter">
            { (*display).clone() }
            <span class="typewriter-caret">{ "|" }</span>
        </span>
    }
}

fn schedule(
    machine: Rc<RefCell<Typewriter>>,
    pending: Rc<RefCell<Option<Timeout>>>,
    display: UseStateHandle<String>,
    delay_ms: u32,
) {
    let pending_slot = Rc::clone(&pending);
    let timeout = Timeout::new(delay_ms, move || {
        pending_slot.borrow_mut().take();
        let next_delay = {
            let mut machine = machine.borrow_mut();
            let delay = machine.tick();
            display.set(machine.display().to_string());
            delay
        };
        schedule(machine, pending_slot, display, next_delay);
    });
    *pending.borrow_mut() = Some(timeout);
}
