use super::*;
use crate::config::FormDecl;
use crate::rules::EMAIL_FIELD;

fn input(class: &str, name: &str, value: &str, bounds: (&str, &str, &str)) -> InputElement {
    InputElement::new()
        .with_attr("type", "text")
        .with_attr("class", class)
        .with_attr("name", name)
        .with_attr("value", value)
        .with_attr("data-rangeStart", bounds.0)
        .with_attr("data-rangeEnd", bounds.1)
        .with_attr("data-step", bounds.2)
}

fn rendered_form() -> Vec<(InputId, InputElement)> {
    vec![
        (
            InputId::from_raw(1),
            input("npsgdRange", "wavelength", "20-80", ("0", "100", "1")),
        ),
        (
            InputId::from_raw(2),
            input("npsgdFloatRange", "gain", "NaN-ish", ("0", "10", "0.5")),
        ),
        (
            InputId::from_raw(3),
            input("npsgdInteger", "runs", "3", ("None", "None", "None")),
        ),
        (
            InputId::from_raw(4),
            InputElement::new()
                .with_attr("type", "text")
                .with_attr("name", EMAIL_FIELD),
        ),
    ]
}

fn bound() -> (InputValueStore, ParameterForm) {
    let mut store = InputValueStore::new();
    let form = ParameterForm::bind(&rendered_form(), &mut store).expect("valid form");
    (store, form)
}

#[test]
fn binds_sliders_only_to_slider_fields() {
    let (store, form) = bound();

    assert_eq!(form.fields().count(), 3);
    assert!(matches!(
        form.controller(InputId::from_raw(1)),
        Some(BoundController::Range(_))
    ));
    assert!(matches!(
        form.controller(InputId::from_raw(2)),
        Some(BoundController::Scalar(_))
    ));
    assert!(form.controller(InputId::from_raw(3)).is_none());
    assert!(form.controller(InputId::from_raw(4)).is_none());

    assert_eq!(store.get(InputId::from_raw(1)), Some("20-80"));
    assert_eq!(store.get(InputId::from_raw(2)), Some("0.0"));
    assert_eq!(store.get(InputId::from_raw(3)), Some("3"));
    assert!(!store.has(InputId::from_raw(4)));
}

#[test]
fn rebinding_keeps_user_text() {
    let mut store = InputValueStore::new();
    store.ensure_initial(InputId::from_raw(1), "30-40".to_string());

    let mut form = ParameterForm::bind(&rendered_form(), &mut store).expect("valid form");

    assert_eq!(
        form.slider_reading(InputId::from_raw(1), &mut store),
        Some(SliderReading::Range(30.0, 40.0))
    );
}

#[test]
fn drag_events_update_text() {
    let (mut store, mut form) = bound();
    let wavelength = InputId::from_raw(1);
    let gain = InputId::from_raw(2);

    let moved = form.dispatch(
        FieldEvent::Drag {
            id: wavelength,
            handle: Some(Handle::Low),
            value: 35.0,
        },
        &mut store,
    );
    assert!(moved);
    assert_eq!(store.get(wavelength), Some("35-80"));

    form.dispatch(
        FieldEvent::Drag {
            id: wavelength,
            handle: None,
            value: 90.0,
        },
        &mut store,
    );
    assert_eq!(store.get(wavelength), Some("35-90"));

    form.dispatch(
        FieldEvent::Drag {
            id: gain,
            handle: None,
            value: 7.3,
        },
        &mut store,
    );
    assert_eq!(store.get(gain), Some("7.5"));
}

#[test]
fn commit_only_reaches_controller_on_change() {
    let (mut store, mut form) = bound();
    let wavelength = InputId::from_raw(1);

    assert!(!form.dispatch(FieldEvent::Commit { id: wavelength }, &mut store));

    store.replace(wavelength, "10-20");
    assert!(form.dispatch(FieldEvent::Commit { id: wavelength }, &mut store));
    assert_eq!(
        form.slider_reading(wavelength, &mut store),
        Some(SliderReading::Range(10.0, 20.0))
    );

    assert!(!form.dispatch(FieldEvent::Commit { id: wavelength }, &mut store));
}

#[test]
fn last_event_wins_between_text_and_slider() {
    let (mut store, mut form) = bound();
    let wavelength = InputId::from_raw(1);

    store.replace(wavelength, "10-20");
    form.dispatch(FieldEvent::Commit { id: wavelength }, &mut store);
    form.dispatch(
        FieldEvent::Drag {
            id: wavelength,
            handle: Some(Handle::High),
            value: 50.0,
        },
        &mut store,
    );

    assert_eq!(store.get(wavelength), Some("10-50"));
    assert_eq!(
        form.slider_reading(wavelength, &mut store),
        Some(SliderReading::Range(10.0, 50.0))
    );
}

#[test]
fn malformed_commit_is_corrected_on_next_reading() {
    let (mut store, mut form) = bound();
    let wavelength = InputId::from_raw(1);

    store.replace(wavelength, "notarange");
    form.dispatch(FieldEvent::Commit { id: wavelength }, &mut store);
    assert_eq!(store.get(wavelength), Some("notarange"));

    assert_eq!(
        form.slider_reading(wavelength, &mut store),
        Some(SliderReading::Range(0.0, 100.0))
    );
    assert_eq!(store.get(wavelength), Some("0-100"));
}

#[test]
fn events_for_unbound_fields_are_ignored() {
    let (mut store, mut form) = bound();
    let runs = InputId::from_raw(3);

    store.replace(runs, "4");
    assert!(!form.dispatch(FieldEvent::Commit { id: runs }, &mut store));
    assert!(!store.is_dirty(runs));
    assert!(form.slider_reading(runs, &mut store).is_none());
}

#[test]
fn rules_cover_every_declared_field() {
    let (_store, form) = bound();
    let rules = form.rules();

    assert_eq!(rules.len(), 4);
    assert!(rules.contains(EMAIL_FIELD));
    assert!(rules.get("wavelength").is_some_and(|r| r.accepts("0-100")));
    assert!(rules.get("gain").is_some_and(|r| !r.accepts("11")));
    assert!(rules.get("runs").is_some_and(|r| !r.accepts("1.5")));
    assert_eq!(form.id_of("gain"), Some(InputId::from_raw(2)));
}

#[test]
fn bad_declaration_fails_the_bind() {
    let mut store = InputValueStore::new();
    let elements = vec![(
        InputId::from_raw(9),
        input("npsgdRange", "dose", "", ("1", "None", "1")),
    )];

    let err = ParameterForm::bind(&elements, &mut store).unwrap_err();
    assert!(matches!(err, FieldSpecError::MissingBound { .. }));
}

#[test]
fn duplicate_names_fail_the_bind() {
    let mut store = InputValueStore::new();
    let mut elements = rendered_form();
    elements.push((
        InputId::from_raw(5),
        input("npsgdFloat", "gain", "1", ("None", "None", "None")),
    ));

    let err = ParameterForm::bind(&elements, &mut store).unwrap_err();
    assert_eq!(err, FieldSpecError::DuplicateName("gain".to_string()));
    assert!(!store.has(InputId::from_raw(1)));
}

#[test]
fn off_grid_initial_text_matches_the_slider() {
    let mut store = InputValueStore::new();
    let elements = vec![
        (
            InputId::from_raw(1),
            input("npsgdRange", "wavelength", "20.3-79.6", ("0", "100", "1")),
        ),
        (
            InputId::from_raw(2),
            input("npsgdFloatRange", "gain", "3.14159", ("0", "10", "0.5")),
        ),
    ];
    let mut form = ParameterForm::bind(&elements, &mut store).expect("valid form");

    assert_eq!(
        form.slider_reading(InputId::from_raw(1), &mut store),
        Some(SliderReading::Range(20.0, 80.0))
    );
    assert_eq!(store.get(InputId::from_raw(1)), Some("20-80"));
    assert_eq!(
        form.slider_reading(InputId::from_raw(2), &mut store),
        Some(SliderReading::Scalar(3.0))
    );
    assert_eq!(store.get(InputId::from_raw(2)), Some("3.0"));
}

#[test]
fn binds_from_config() {
    let decl = FormDecl::from_toml_str(
        r#"
        [[field]]
        name = "dose"
        kind = "bounded_range"
        range_start = 1
        range_end = 5
        value = "2-3"

        [[field]]
        name = "level"
        kind = "bounded_integer"
        range_start = 0
        range_end = 10
        step = 1
        "#,
    )
    .expect("valid declaration");

    let mut store = InputValueStore::new();
    let mut form = ParameterForm::from_decl(&decl, &mut store).expect("valid form");

    assert_eq!(form.id_of("level"), Some(InputId::from_raw(1)));
    assert_eq!(store.get(InputId::from_raw(0)), Some("2-3"));
    assert_eq!(
        form.slider_reading(InputId::from_raw(1), &mut store),
        Some(SliderReading::Scalar(0.0))
    );
    assert_eq!(store.get(InputId::from_raw(1)), Some("0"));
}
