use contracts::shared::notification::Notify;
use contracts::shared::validation::ContactMessage;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::contact::api::submit_contact;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::notification::NotificationService;

const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
const FAILURE_MESSAGE: &str =
    "Failed to send message. Please try again or contact me directly.";
const PULSE_MS: u32 = 200;

#[component]
pub fn ContactSection() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let notifications = leptos::context::use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)");

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let pulse = RwSignal::new(false);

    let reset = move || {
        name.set(String::new());
        email.set(String::new());
        subject.set(String::new());
        message.set(String::new());
    };

    let submit = move || {
        if sending.get_untracked() {
            return;
        }
        let form = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        if !form.check(&notifications) {
            return;
        }

        let endpoint = ctx.config.with_untracked(|c| c.contact.endpoint.clone());
        sending.set(true);
        spawn_local(async move {
            match submit_contact(&endpoint, &form).await {
                Ok(()) => {
                    log::info!("contact message sent");
                    notifications.success(SUCCESS_MESSAGE);
                    reset();
                    pulse.set(true);
                    TimeoutFuture::new(PULSE_MS).await;
                    pulse.set(false);
                }
                Err(e) => {
                    log::error!("contact submission failed: {}", e);
                    notifications.error(FAILURE_MESSAGE);
                }
            }
            sending.set(false);
        });
    };

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">"Get In Touch"</h2>
                <form
                    class="contact-form"
                    novalidate=true
                    on:submit=move |ev: ev::SubmitEvent| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    <div class="form-group">
                        <input
                            type="text"
                            name="name"
                            placeholder="Your Name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <input
                            type="email"
                            name="email"
                            placeholder="Your Email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <input
                            type="text"
                            name="subject"
                            placeholder="Subject"
                            prop:value=move || subject.get()
                            on:input=move |ev| subject.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <textarea
                            name="message"
                            rows="5"
                            placeholder="Your Message"
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || sending.get()
                        style:transform=move || if pulse.get() { "scale(1.05)" } else { "scale(1)" }
                    >
                        {move || if sending.get() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
