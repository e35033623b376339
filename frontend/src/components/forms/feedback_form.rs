use shared::feedback::{submit_feedback, FeedbackForm, SubmitOutcome, MAX_RATING};
use shared::Notification;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::hooks::ToastNotifier;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "FeedbackForm";

#[derive(Properties, PartialEq)]
pub struct FeedbackSettingsProps {
    pub api_client: ApiClient,
    pub on_notify: Callback<Notification>,
}

/// Star rating plus free-text feedback, posted to the backend
#[function_component(FeedbackSettings)]
pub fn feedback_settings(props: &FeedbackSettingsProps) -> Html {
    let form = use_mut_ref(FeedbackForm::new);
    let redraw = use_force_update();

    let on_star_click = {
        let form = form.clone();
        let redraw = redraw.clone();
        move |star: u8| {
            let form = form.clone();
            let redraw = redraw.clone();
            Callback::from(move |_: MouseEvent| {
                form.borrow_mut().set_rating(star);
                redraw.force_update();
            })
        }
    };

    let on_message_input = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            form.borrow_mut().set_message(textarea.value());
            redraw.force_update();
        })
    };

    let on_submit = {
        let form = form.clone();
        let redraw = redraw.clone();
        let api_client = props.api_client.clone();
        let notifier = ToastNotifier::new(props.on_notify.clone());

        Callback::from(move |_: MouseEvent| {
            let form = form.clone();
            let redraw = redraw.clone();
            let api_client = api_client.clone();
            let notifier = notifier.clone();

            spawn_local(async move {
                let outcome =
                    submit_feedback(&form, &api_client, &notifier, || redraw.force_update()).await;

                match outcome {
                    SubmitOutcome::Submitted => {
                        Logger::info_with_component(COMPONENT, "Feedback submitted");
                    }
                    SubmitOutcome::Failed(err) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Failed to submit feedback: {}", err),
                        );
                    }
                    SubmitOutcome::Invalid(err) => {
                        Logger::debug_with_component(COMPONENT, &format!("Rejected locally: {}", err));
                    }
                    SubmitOutcome::Suppressed => {}
                }
            });
        })
    };

    let state = form.borrow();
    let submitting = state.is_submitting();

    html! {
        <section class="feedback-section">
            <div class="feedback-icon">{"💌"}</div>
            <h2>{"We value your feedback!"}</h2>
            <p class="feedback-intro">
                {"Help us improve your ERP experience. Found a bug or have a feature request?"}
            </p>

            <div class="star-rating" role="radiogroup" aria-label="Rating">
                {for (1..=MAX_RATING).map(|star| html! {
                    <button
                        type="button"
                        key={star}
                        class={classes!("star", state.is_star_lit(star).then_some("star-lit"))}
                        aria-label={format!("{} star", star)}
                        onclick={on_star_click(star)}
                    >
                        {"★"}
                    </button>
                })}
            </div>

            <textarea
                class="feedback-message"
                placeholder="Tell us what you think..."
                value={state.message().to_string()}
                oninput={on_message_input}
            />

            <button
                type="button"
                class="btn btn-primary feedback-submit"
                onclick={on_submit}
                disabled={submitting}
            >
                {if submitting {
                    "Submitting..."
                } else {
                    "Submit Feedback"
                }}
            </button>
        </section>
    }
}
