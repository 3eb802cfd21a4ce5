use wasm_bindgen::JsCast;
use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};

use crate::content::{ADDRESS_CITY, ADDRESS_STREET, CONTACT_INTRO, EMAIL, PHONE};
use crate::state::form::{ContactFormState, FieldInput, FormField, ValidationErrors};
use crate::state::ui::Section;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub form: ContactFormState,
    pub errors: ValidationErrors,
    pub highlighted: bool,
    pub on_input: Callback<FieldInput>,
    pub on_submit: Callback<()>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    html! {
        <section id={Section::Contact.id()} class="contact section-padding">
            <div class="container contact-grid">
                <div class="contact-details">
                    <h2>{"Book Your "}<span class="gradient-text">{"Free Consultation"}</span></h2>
                    <p class="contact-intro">{CONTACT_INTRO}</p>

                    <div class="detail-card">
                        <div class="detail-icon blue">{"📞"}</div>
                        <div>
                            <p class="detail-title">{"Phone"}</p>
                            <p>{PHONE}</p>
                        </div>
                    </div>
                    <div class="detail-card">
                        <div class="detail-icon purple">{"✉"}</div>
                        <div>
                            <p class="detail-title">{"Email"}</p>
                            <p>{EMAIL}</p>
                        </div>
                    </div>
                    <div class="detail-card">
                        <div class="detail-icon green">{"📍"}</div>
                        <div>
                            <p class="detail-title">{"Office"}</p>
                            <p>{ADDRESS_STREET}<br />{ADDRESS_CITY}</p>
                        </div>
                    </div>
                </div>

                <ContactForm
                    form={props.form.clone()}
                    errors={props.errors.clone()}
                    highlighted={props.highlighted}
                    on_input={props.on_input.clone()}
                    on_submit={props.on_submit.clone()}
                />
            </div>
            <style>
                {r#"
                .contact {
                    background: linear-gradient(135deg, #f9fafb, #ffffff);
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                }
                .contact-details h2 {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 2rem;
                }
                .contact-intro {
                    font-size: 1.25rem;
                    color: #4b5563;
                    margin-bottom: 2.5rem;
                    line-height: 1.7;
                }
                .detail-card {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    padding: 1.5rem;
                    margin-bottom: 1.5rem;
                    background: #ffffff;
                    border-radius: 1rem;
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
                }
                .detail-icon {
                    padding: 1rem;
                    border-radius: 0.75rem;
                    color: #ffffff;
                }
                .detail-icon.blue { background: linear-gradient(90deg, #3b82f6, #6366f1); }
                .detail-icon.purple { background: linear-gradient(90deg, #a855f7, #ec4899); }
                .detail-icon.green { background: linear-gradient(90deg, #22c55e, #10b981); }
                .detail-title {
                    font-weight: 600;
                    color: #111827;
                }
                @media (max-width: 1024px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub form: ContactFormState,
    pub errors: ValidationErrors,
    pub highlighted: bool,
    pub on_input: Callback<FieldInput>,
    pub on_submit: Callback<()>,
}

fn error_line(errors: &ValidationErrors, field: FormField) -> Html {
    match errors.get(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

fn text_field(props: &ContactFormProps, field: FormField) -> Html {
    let on_input = props.on_input.clone();
    let input_class = classes!("form-input", props.errors.contains(field).then(|| "input-error"));

    let control = if field == FormField::Message {
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_input.emit(FieldInput::Text(field, input.value()));
        });
        html! {
            <textarea
                id={field.id()}
                name={field.id()}
                rows="4"
                class={input_class}
                placeholder={field.placeholder()}
                value={props.form.text(field).to_string()}
                oninput={oninput}
            />
        }
    } else {
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(FieldInput::Text(field, input.value()));
        });
        html! {
            <input
                type={field.input_type()}
                id={field.id()}
                name={field.id()}
                class={input_class}
                placeholder={field.placeholder()}
                value={props.form.text(field).to_string()}
                oninput={oninput}
            />
        }
    };

    html! {
        <div class="form-group">
            <label for={field.id()}>
                <span class="gradient-text">{field.label()}</span>{" *"}
            </label>
            { control }
            { error_line(&props.errors, field) }
        </div>
    }
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_agree = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                on_input.emit(FieldInput::Checked(input.checked()));
            }
        })
    };

    let agree = FormField::AgreeToContact;

    html! {
        <div class="form-card">
            <h3 class={classes!("form-title", props.highlighted.then(|| "highlighted"))}>
                {"Request Your "}<span class="gradient-text">{"Free Consultation"}</span>
            </h3>
            <form onsubmit={onsubmit} class={classes!("contact-form", props.highlighted.then(|| "highlighted"))}>
                { text_field(props, FormField::Name) }
                { text_field(props, FormField::Phone) }
                { text_field(props, FormField::Email) }
                { text_field(props, FormField::Message) }
                { text_field(props, FormField::PreferredTime) }

                <div class="form-check">
                    <input
                        type="checkbox"
                        id={agree.id()}
                        name={agree.id()}
                        checked={props.form.agree_to_contact}
                        onchange={on_agree}
                    />
                    <label for={agree.id()}>{agree.label()}{" *"}</label>
                </div>
                { error_line(&props.errors, agree) }

                <button type="submit" class="btn-primary submit">{"Send Message"}</button>
            </form>
            <style>
                {r#"
                .form-card {
                    background: #ffffff;
                    padding: 2.5rem;
                    border-radius: 1rem;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
                }
                .form-title {
                    font-size: 1.875rem;
                    font-weight: 600;
                    color: #111827;
                    margin-bottom: 2rem;
                    transition: all 0.5s ease;
                }
                .form-title.highlighted {
                    transform: scale(1.05);
                    color: #2563eb;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    transition: all 0.5s ease;
                }
                .contact-form.highlighted {
                    box-shadow: 0 0 0 4px #93c5fd;
                    background: rgba(239, 246, 255, 0.3);
                    border-radius: 1rem;
                    padding: 1.5rem;
                }
                .form-group label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                    margin-bottom: 0.75rem;
                }
                .form-input {
                    width: 100%;
                    padding: 0.875rem 1rem;
                    border: 2px solid #e5e7eb;
                    border-radius: 0.75rem;
                    font-size: 1rem;
                    transition: border-color 0.3s ease;
                }
                .form-input:focus {
                    outline: none;
                    border-color: #3b82f6;
                }
                .form-input.input-error {
                    border-color: #ef4444;
                }
                .field-error {
                    color: #ef4444;
                    font-size: 0.875rem;
                    margin-top: 0.5rem;
                }
                .form-check {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: #374151;
                }
                .form-check input {
                    margin-top: 0.25rem;
                    width: 1.25rem;
                    height: 1.25rem;
                }
                .btn-primary.submit {
                    width: 100%;
                    margin-top: 2rem;
                }
                "#}
            </style>
        </div>
    }
}
