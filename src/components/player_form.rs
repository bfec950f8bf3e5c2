use uuid::Uuid;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::model::{Division, DivisionGroup, PlayerDraft, PlayerFormState, PlayerFormValues};

#[derive(Properties, PartialEq)]
pub struct PlayerFormProps {
    pub initial_values: PlayerFormValues,
    pub divisions: Vec<Division>,
    pub division_groups: Vec<DivisionGroup>,
    /// Emitted with a validated draft; never fires while the form is
    /// invalid or busy.
    pub on_submit: Callback<PlayerDraft>,
    pub on_cancel: Callback<()>,
    pub submit_label: AttrValue,
    pub description: AttrValue,
    /// A submission is in flight; the triggers stay disabled.
    #[prop_or_default]
    pub busy: bool,
    /// External reasons to hold submission (e.g. parent data still loading).
    #[prop_or_default]
    pub disable_submit: bool,
}

/// Externally-controlled player form: options and initial values come in as
/// props, submit/cancel go out as callbacks. All field rules and the
/// division → group dependency live in [`PlayerFormState`].
#[function_component(PlayerFormComp)]
pub fn player_form_comp(props: &PlayerFormProps) -> Html {
    let form = use_state(|| PlayerFormState::new(props.initial_values.clone()));
    let form_id = use_state(|| Uuid::new_v4().to_string());

    {
        let form = form.clone();
        use_effect_with(props.initial_values.clone(), move |initial| {
            form.set(PlayerFormState::new(initial.clone()));
            || ()
        });
    }

    let errors = form.errors(&props.divisions, &props.division_groups);
    let available_groups: Vec<DivisionGroup> = form
        .available_groups(&props.division_groups)
        .into_iter()
        .cloned()
        .collect();
    let can_submit = form.can_submit(
        &props.divisions,
        &props.division_groups,
        props.busy,
        props.disable_submit,
    );

    let on_full_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_full_name(input.value());
            form.set(next);
        })
    };

    let on_photo_url = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_photo_url(input.value());
            form.set(next);
        })
    };

    let on_rating = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_rating(input.value());
            form.set(next);
        })
    };

    let on_division = {
        let form = form.clone();
        let groups = props.division_groups.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_division_id(select.value(), &groups);
            form.set(next);
        })
    };

    let on_group = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_group_id(select.value());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let divisions = props.divisions.clone();
        let groups = props.division_groups.clone();
        let on_submit = props.on_submit.clone();
        let busy = props.busy;
        let disable_submit = props.disable_submit;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.can_submit(&divisions, &groups, busy, disable_submit) {
                return;
            }
            if let Some(draft) = form.draft(&divisions, &groups) {
                on_submit.emit(draft);
            }
        })
    };

    let on_cancel = {
        let form = form.clone();
        let initial = props.initial_values.clone();
        let callback = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(PlayerFormState::new(initial.clone()));
            callback.emit(());
        })
    };

    let values = form.values();
    let group_select_disabled =
        values.division_id.is_empty() || available_groups.is_empty() || props.busy;

    html! {
        <form class="roster-admin-player-form" {onsubmit}>
            <p class="roster-admin-player-form__description">{props.description.clone()}</p>

            <label class="roster-admin-player-form__label" for={format!("{}-full-name", *form_id)}>
                {"Full Name"}
            </label>
            <input
                id={format!("{}-full-name", *form_id)}
                class="roster-admin-player-form__input"
                type="text"
                placeholder="Player name"
                value={values.full_name.clone()}
                oninput={on_full_name}
                disabled={props.busy}
            />
            {error_view(&errors.full_name)}

            <label class="roster-admin-player-form__label" for={format!("{}-photo-url", *form_id)}>
                {"Photo URL"}<span class="roster-admin-player-form__optional">{" (Optional)"}</span>
            </label>
            <input
                id={format!("{}-photo-url", *form_id)}
                class="roster-admin-player-form__input"
                type="url"
                placeholder="https://example.com/photo.jpg"
                value={values.photo_url.clone()}
                oninput={on_photo_url}
                disabled={props.busy}
            />
            {error_view(&errors.photo_url)}

            <label class="roster-admin-player-form__label" for={format!("{}-rating", *form_id)}>
                {"Rating"}
            </label>
            <input
                id={format!("{}-rating", *form_id)}
                class="roster-admin-player-form__input"
                type="number"
                min="0"
                placeholder="1500"
                value={values.rating.clone()}
                oninput={on_rating}
                disabled={props.busy}
            />
            {error_view(&errors.rating)}

            <label class="roster-admin-player-form__label" for={format!("{}-division", *form_id)}>
                {"Division"}
            </label>
            <select
                id={format!("{}-division", *form_id)}
                class="roster-admin-player-form__select"
                aria-label="Division"
                value={values.division_id.clone()}
                onchange={on_division}
                disabled={props.divisions.is_empty() || props.busy}
            >
                <option value="" selected={values.division_id.is_empty()}>
                    {"Select a division"}
                </option>
                {for props.divisions.iter().map(|division| html! {
                    <option
                        key={division.id.clone()}
                        value={division.id.clone()}
                        selected={values.division_id == division.id}
                    >
                        {&division.name}
                    </option>
                })}
            </select>
            {error_view(&errors.division_id)}

            <label class="roster-admin-player-form__label" for={format!("{}-group", *form_id)}>
                {"Group"}
                <span class="roster-admin-player-form__optional">{" (Optional)"}</span>
            </label>
            <select
                id={format!("{}-group", *form_id)}
                class="roster-admin-player-form__select"
                aria-label="Group"
                value={values.group_id.clone()}
                onchange={on_group}
                disabled={group_select_disabled}
            >
                <option value="" selected={values.group_id.is_empty()}>
                    {if available_groups.is_empty() { "No groups available" } else { "No group" }}
                </option>
                {for available_groups.iter().map(|group| html! {
                    <option
                        key={group.id.clone()}
                        value={group.id.clone()}
                        selected={values.group_id == group.id}
                    >
                        {&group.name}
                    </option>
                })}
            </select>
            {error_view(&errors.group_id)}

            <div class="roster-admin-player-form__actions">
                <button
                    class="roster-admin-player-form__submit"
                    type="submit"
                    disabled={!can_submit}
                >
                    {props.submit_label.clone()}
                </button>
                <button
                    class="roster-admin-player-form__cancel"
                    type="button"
                    onclick={on_cancel}
                    disabled={props.busy}
                >
                    {"Cancel"}
                </button>
            </div>
        </form>
    }
}

fn error_view(message: &Option<String>) -> Html {
    match message {
        Some(message) => html! {
            <span class="roster-admin-player-form__error">{message}</span>
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_default_to_enabled() {
        let props = yew::props!(PlayerFormProps {
            initial_values: PlayerFormValues::for_new_player(),
            divisions: Vec::new(),
            division_groups: Vec::new(),
            on_submit: Callback::from(|_: PlayerDraft| {}),
            on_cancel: Callback::from(|_: ()| {}),
            submit_label: "Save",
            description: "Provide details",
        });

        assert!(!props.busy);
        assert!(!props.disable_submit);
        assert_eq!(props.initial_values.rating, "0");
    }
}
