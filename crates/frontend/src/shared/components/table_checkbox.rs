use leptos::prelude::*;

/// Row selection cell for the submissions table
///
/// Renders a `<td>` holding the checkbox. Clicks stop at the cell so a row
/// click handler never sees them.
///
/// # BEM classes
/// - `.table__cell--checkbox` on the cell
/// - `.table__checkbox` on the input
#[component]
pub fn TableCheckbox(
    checked: Signal<bool>,
    /// Receives the new checked state
    on_change: Callback<bool>,
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                prop:disabled=disabled
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}
