//! Contact form: inline validation and a simulated send.

use crate::config::{
    CONTACT_FORM, FIELD_ERROR, FORM_ERROR, FORM_FIELDS, FORM_SUBMIT_DELAY_MS, FORM_SUCCESS,
    FORM_SUCCESS_MESSAGE, FORM_SUCCESS_VISIBLE_MS, SUBMIT_BUTTON, SUBMIT_PENDING_LABEL,
};
use crate::utils::{missing_field, validate_field, ContactSubmission, Field, FieldError};
use crate::{dom, WidgetError};
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement,
};

type FieldHandles = Rc<Vec<(Field, HtmlElement)>>;

pub struct ContactForm {
    _listeners: Vec<EventListener>,
}

pub fn init() -> Result<ContactForm, WidgetError> {
    let form: HtmlFormElement = dom::query(CONTACT_FORM)?.unchecked_into();
    let fields: FieldHandles = Rc::new(
        dom::query_all_in(&form, FORM_FIELDS)
            .into_iter()
            .filter_map(|el| {
                let field = Field::from_name(&el.get_attribute("name")?)?;
                Some((field, el))
            })
            .collect(),
    );
    // Every field is validated on submit, so each one needs an element to
    // carry its error message.
    let present: Vec<Field> = fields.iter().map(|(field, _)| *field).collect();
    if let Some(field) = missing_field(&present) {
        return Err(WidgetError::MissingElement(field.name()));
    }
    let submit = form
        .query_selector(SUBMIT_BUTTON)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    let sending = Rc::new(Cell::new(false));

    let mut listeners = Vec::with_capacity(fields.len() * 2 + 1);

    for (field, el) in fields.iter() {
        let (field, target) = (*field, el.clone());
        listeners.push(EventListener::new(el, "blur", move |_| {
            clear_error(&target);
            if let Err(err) = validate_field(field, &field_value(&target)) {
                show_error(&target, &err);
            }
        }));

        let target = el.clone();
        listeners.push(EventListener::new(el, "input", move |_| clear_error(&target)));
    }

    {
        let form_el = form.clone();
        listeners.push(EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                event.prevent_default();
                if sending.get() {
                    return;
                }
                clear_all_errors(&form_el, &fields);

                let submission = read_submission(&fields);
                let errors = submission.validate();
                if !errors.is_empty() {
                    debug!("Contact form rejected with {} field errors", errors.len());
                    for err in &errors {
                        if let Some((_, el)) = fields.iter().find(|(f, _)| *f == err.field) {
                            show_error(el, err);
                        }
                    }
                    return;
                }

                sending.set(true);
                spawn_local(send(form_el.clone(), submit.clone(), sending.clone()));
            },
        ));
    }

    Ok(ContactForm {
        _listeners: listeners,
    })
}

/// Stand-in for a real backend call: show a pending button for a moment,
/// then confirm and reset.
async fn send(form: HtmlFormElement, submit: Option<HtmlButtonElement>, sending: Rc<Cell<bool>>) {
    let label = submit.as_ref().and_then(|button| button.text_content());
    if let Some(button) = &submit {
        button.set_disabled(true);
        button.set_text_content(Some(SUBMIT_PENDING_LABEL));
    }

    TimeoutFuture::new(FORM_SUBMIT_DELAY_MS).await;

    if let Some(button) = &submit {
        button.set_disabled(false);
        button.set_text_content(label.as_deref());
    }
    if let Err(e) = show_success(&form) {
        warn!("Could not show contact confirmation: {}", e);
    }
    form.reset();
    sending.set(false);
    info!("Contact form sent");
}

fn show_success(form: &HtmlFormElement) -> Result<(), WidgetError> {
    let document = dom::document()?;
    if let Some(parent) = form.parent_element() {
        for stale in dom::query_all_in(&parent, &format!(".{}", FORM_SUCCESS)) {
            stale.remove();
        }
    }
    let banner = document.create_element("div")?;
    dom::add_class(&banner, FORM_SUCCESS);
    banner.set_attribute("role", "status")?;
    banner.set_text_content(Some(FORM_SUCCESS_MESSAGE));
    form.insert_adjacent_element("beforebegin", &banner)?;
    Timeout::new(FORM_SUCCESS_VISIBLE_MS, move || banner.remove()).forget();
    Ok(())
}

fn read_submission(fields: &[(Field, HtmlElement)]) -> ContactSubmission {
    let mut submission = ContactSubmission::default();
    for (field, el) in fields {
        submission.set(*field, field_value(el));
    }
    submission
}

fn field_value(el: &HtmlElement) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = el.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        el.text_content().unwrap_or_default()
    }
}

fn show_error(el: &HtmlElement, err: &FieldError) {
    dom::add_class(el, FIELD_ERROR);
    let Ok(document) = dom::document() else {
        return;
    };
    let Ok(message) = document.create_element("span") else {
        return;
    };
    dom::add_class(&message, FORM_ERROR);
    let _ = message.set_attribute("data-field", err.field.name());
    message.set_text_content(Some(&err.message));
    let _ = el.insert_adjacent_element("afterend", &message);
}

fn clear_error(el: &HtmlElement) {
    dom::remove_class(el, FIELD_ERROR);
    while let Some(next) = el.next_element_sibling() {
        if !dom::has_class(&next, FORM_ERROR) {
            break;
        }
        next.remove();
    }
}

fn clear_all_errors(form: &HtmlFormElement, fields: &[(Field, HtmlElement)]) {
    for stale in dom::query_all_in(form, &format!(".{}", FORM_ERROR)) {
        stale.remove();
    }
    for (_, el) in fields {
        dom::remove_class(el, FIELD_ERROR);
    }
}
