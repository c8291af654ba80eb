use leptos::{component, view, IntoView, create_rw_signal, create_memo, SignalGet, SignalUpdate, SignalWith, spawn_local, on_cleanup, event_target_value, Callback, Callable};
use leptos::logging::error;
use crate::api::ReservationApi;
use crate::components::use_reservation_api;
use crate::flow::cancellation::CancellationFlow;
use crate::flow::Liveness;
use crate::logging::log;

/// Cancel a booking by customer name and route id
#[component]
#[must_use]
pub fn CancelBooking(on_back: Callback<()>) -> impl IntoView {
    let flow = create_rw_signal(CancellationFlow::new());
    let api = use_reservation_api();

    let liveness = Liveness::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.retire()
    });

    let submit = move || {
        let Some(Ok(request)) = flow.try_update(CancellationFlow::begin_submit) else {
            return;
        };

        let api = api.clone();
        let liveness = liveness.clone();
        log!("Cancelling booking of {} on route {}", request.customer_name, request.route_id);
        spawn_local(async move {
            let response = api.cancel_booking(&request).await;
            if let Err(e) = &response {
                error!("Cancellation error: {e}");
            }
            flow.try_update(|f| liveness.deliver(f, response, CancellationFlow::finish_submit));
        });
    };

    let confirmation = create_memo(move |_| flow.with(|f| f.confirmation().map(str::to_string)));

    view! {
        {move || match confirmation.get() {
            Some(message) => view! {
                <div class="cancel-booking confirmation">
                    <h2 class="confirmation-title">"Cancellation Confirmed"</h2>
                    <p class="confirmation-message">{message}</p>
                    <p class="confirmation-details">"A confirmation email has been sent."</p>
                    <button class="primary" on:click=move |_| on_back.call(())>
                        "Back to Routes"
                    </button>
                </div>
            }.into_view(),
            None => {
                let submit = submit.clone();
                view! {
                    <div class="cancel-booking">
                        <h2 class="cancel-title">"Cancel Your Booking"</h2>
                        <form
                            class="cancel-form"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                submit();
                            }
                        >
                            <label for="customerName">"Customer Name"</label>
                            <input
                                type="text"
                                id="customerName"
                                placeholder="The name used for booking"
                                prop:value=move || flow.with(|f| f.customer_name().to_string())
                                on:input=move |ev| flow.update(|f| f.set_customer_name(event_target_value(&ev)))
                            />

                            <label for="routeId">"Route ID"</label>
                            <input
                                type="number"
                                id="routeId"
                                placeholder="Enter the Route ID"
                                prop:value=move || flow.with(|f| f.route_id().to_string())
                                on:input=move |ev| flow.update(|f| f.set_route_id(event_target_value(&ev)))
                            />

                            {move || flow.with(|f| f.error().map(str::to_string)).map(|err| view! {
                                <p class="form-error">{err}</p>
                            })}

                            <div class="form-buttons">
                                <button type="button" on:click=move |_| on_back.call(())>
                                    "Go Back"
                                </button>
                                <button
                                    type="submit"
                                    class="danger"
                                    disabled=move || flow.with(CancellationFlow::is_submitting)
                                >
                                    {move || if flow.with(CancellationFlow::is_submitting) {
                                        "Cancelling..."
                                    } else {
                                        "Cancel Booking"
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>
                }.into_view()
            }
        }}
    }
}
