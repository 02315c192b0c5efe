use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::contact::{Category, ContactForm, Field};

pub enum FormAction {
    Update(Field, String),
    Submit,
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = (*self).clone();
        match action {
            FormAction::Update(field, value) => form.update(field, value),
            FormAction::Submit => match form.submit() {
                Ok(record) => {
                    info!("Contact request accepted");
                    match serde_json::to_string(record) {
                        Ok(json) => debug!("Contact record: {}", json),
                        Err(err) => warn!("Could not serialize contact record: {}", err),
                    }
                }
                Err(err) => {
                    info!("Contact request rejected: {}", err);
                    return self;
                }
            },
        }
        form.into()
    }
}

fn field_label(field: Field) -> Html {
    html! {
        <label class="contact-label">
            <span>{field.label()}</span>
            if field.is_required() {
                <span class="contact-required">{" *"}</span>
            } else {
                <span class="contact-optional">{" (optional)"}</span>
            }
        </label>
    }
}

fn text_input(
    form: &UseReducerHandle<ContactForm>,
    field: Field,
    input_type: &'static str,
    placeholder: &'static str,
) -> Html {
    let oninput = {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Update(field, input.value()));
        })
    };

    html! {
        <div class="contact-field">
            { field_label(field) }
            <input
                class="contact-input"
                type={input_type}
                value={form.draft().get(field).to_string()}
                {placeholder}
                {oninput}
            />
        </div>
    }
}

#[function_component(ContactFormView)]
pub fn contact_form_view() -> Html {
    let form = use_reducer(ContactForm::default);

    if form.is_submitted() {
        return html! {
            <div class="contact-thanks">
                <div class="contact-check">{"✓"}</div>
                <h3>{"Thank you!"}</h3>
                <p>
                    {"We've received your information and will be in touch soon to explore how EQ & You can work in your space."}
                </p>
            </div>
        };
    }

    let on_category = {
        let form = form.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FormAction::Update(Field::Category, select.value()));
        })
    };

    let on_submit = {
        let form = form.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            form.dispatch(FormAction::Submit);
        })
    };

    let selected = form.draft().category.clone();
    let can_submit = form.can_submit();

    html! {
        <div class="contact-card">
            { text_input(&form, Field::Name, "text", "Your name") }
            { text_input(&form, Field::Email, "email", "you@company.com") }
            { text_input(&form, Field::Organization, "text", "Company or venue name") }
            <div class="contact-row">
                { text_input(&form, Field::Role, "text", "Your role") }
                <div class="contact-field">
                    { field_label(Field::Category) }
                    <select class="contact-input" onchange={on_category}>
                        <option value="" selected={selected.is_empty()}>{"Select..."}</option>
                        {
                            for Category::ALL.into_iter().map(|category| html! {
                                <option
                                    value={category.value()}
                                    selected={selected == category.value()}
                                >
                                    {category.label()}
                                </option>
                            })
                        }
                    </select>
                </div>
            </div>
            <button
                class={classes!("contact-submit", (!can_submit).then(|| "disabled"))}
                disabled={!can_submit}
                onclick={on_submit}
            >
                {"Get in Touch"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(form: Rc<ContactForm>, action: FormAction) -> Rc<ContactForm> {
        form.reduce(action)
    }

    #[test]
    fn rejected_submit_returns_same_state() {
        let form = Rc::new(ContactForm::default());
        let form = reduce(form, FormAction::Update(Field::Name, "Ada".to_string()));
        let after = reduce(form.clone(), FormAction::Submit);
        assert!(Rc::ptr_eq(&form, &after));
        assert!(!after.is_submitted());
    }

    #[test]
    fn accepted_submit_switches_to_thank_you() {
        let mut form = Rc::new(ContactForm::default());
        for (field, value) in [
            (Field::Name, "Ada"),
            (Field::Email, "a@b.com"),
            (Field::Organization, "Acme"),
        ] {
            form = reduce(form, FormAction::Update(field, value.to_string()));
        }
        let form = reduce(form, FormAction::Submit);
        assert!(form.is_submitted());
    }
}
