use leptos::{component, view, IntoView, Callback, Callable};
use crate::models::{seat_rows, SeatStatus};

/// Bus seat map: four seats per row with the aisle in the middle
#[component]
#[must_use]
pub fn SeatGrid(
    capacity: u32,
    seat_status: impl Fn(u32) -> SeatStatus + Copy + 'static,
    on_select: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="seat-grid">
            {seat_rows(capacity).into_iter().map(|row| view! {
                <div class="seat-row">
                    {row.left.iter().map(|&seat| view! {
                        <SeatButton seat=seat seat_status=seat_status on_select=on_select />
                    }).collect::<Vec<_>>()}
                    <div class="aisle"></div>
                    {row.right.iter().map(|&seat| view! {
                        <SeatButton seat=seat seat_status=seat_status on_select=on_select />
                    }).collect::<Vec<_>>()}
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn SeatButton(
    seat: u32,
    seat_status: impl Fn(u32) -> SeatStatus + Copy + 'static,
    on_select: Callback<u32>,
) -> impl IntoView {
    let status = move || seat_status(seat);

    view! {
        <button
            type="button"
            class=move || status().css_class()
            disabled=move || status() == SeatStatus::Occupied
            aria-label=format!("Seat {seat}")
            on:click=move |_| {
                if status() != SeatStatus::Occupied {
                    on_select.call(seat);
                }
            }
        >
            <span class="seat-number">{seat}</span>
        </button>
    }
}

#[component]
#[must_use]
pub fn SeatLegend() -> impl IntoView {
    view! {
        <div class="seat-legend">
            {[SeatStatus::Available, SeatStatus::Selected, SeatStatus::Occupied]
                .into_iter()
                .map(|status| view! {
                    <div class="legend-entry">
                        <span class=format!("{} legend-swatch", status.css_class())></span>
                        <span>{status.label()}</span>
                    </div>
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
