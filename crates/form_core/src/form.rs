//! Binding a whole parameter form: one controller per slider-bearing field
//! and routing of UI events to the controller that owns the field.

use crate::config::FormDecl;
use crate::field::{FieldKind, FieldSpec, FieldSpecError};
use crate::markup::InputElement;
use crate::range::RangeFieldController;
use crate::rules::{self, RuleSet};
use crate::scalar::ScalarFieldController;
use input_core::{InputId, InputValueStore};
use slider_core::{Handle, RangeSliderModel, SliderModel};
use std::collections::{BTreeMap, HashSet};

#[cfg(test)]
mod tests;

/// A UI event for one field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldEvent {
    /// The pointer dragged a slider to `value`.
    ///
    /// `handle` picks the handle of a range slider; `None` drags whichever
    /// is nearest. Scalar sliders ignore it.
    Drag {
        id: InputId,
        handle: Option<Handle>,
        value: f64,
    },
    /// The text field lost focus or the user pressed enter.
    Commit { id: InputId },
}

impl FieldEvent {
    pub fn id(&self) -> InputId {
        match self {
            FieldEvent::Drag { id, .. } | FieldEvent::Commit { id } => *id,
        }
    }
}

#[derive(Debug)]
pub enum BoundController {
    Range(RangeFieldController<RangeSliderModel>),
    Scalar(ScalarFieldController<SliderModel>),
}

impl BoundController {
    pub fn spec(&self) -> &FieldSpec {
        match self {
            BoundController::Range(c) => c.spec(),
            BoundController::Scalar(c) => c.spec(),
        }
    }
}

/// Current slider reading of a bound field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderReading {
    Range(f64, f64),
    Scalar(f64),
}

/// Declared fields of one form and the controllers bound to them.
///
/// Each controller is the only writer of its own text field; fields share no
/// state, so events for different fields can arrive in any order.
#[derive(Debug, Default)]
pub struct ParameterForm {
    fields: Vec<(InputId, FieldSpec)>,
    controllers: BTreeMap<InputId, BoundController>,
}

impl ParameterForm {
    /// Bind every parameter input among `elements`.
    ///
    /// Inputs without a parameter marker are skipped. Two parameter inputs
    /// with the same name are rejected before anything is seeded. Text values are
    /// seeded from each element's `value` attribute unless the store already
    /// holds one, so re-binding after a re-render keeps what the user typed.
    pub fn bind(
        elements: &[(InputId, InputElement)],
        store: &mut InputValueStore,
    ) -> Result<Self, FieldSpecError> {
        let mut decoded = Vec::new();
        for (id, el) in elements {
            match FieldSpec::from_element(el)? {
                Some(spec) => decoded.push((*id, spec, el.value().to_string())),
                None => log::trace!(target: "form.bind", "{id}: not a parameter field"),
            }
        }
        Self::bind_specs(decoded, store)
    }

    /// Bind a form declared in config. Field `i` gets `InputId` `i`.
    pub fn from_decl(
        decl: &FormDecl,
        store: &mut InputValueStore,
    ) -> Result<Self, FieldSpecError> {
        let decoded = decl
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                (
                    InputId::from(i),
                    field.spec(),
                    field.value.clone().unwrap_or_default(),
                )
            })
            .collect();
        Self::bind_specs(decoded, store)
    }

    fn bind_specs(
        decoded: Vec<(InputId, FieldSpec, String)>,
        store: &mut InputValueStore,
    ) -> Result<Self, FieldSpecError> {
        let mut names = HashSet::new();
        for (_, spec, _) in &decoded {
            if !names.insert(spec.name.as_str()) {
                return Err(FieldSpecError::DuplicateName(spec.name.clone()));
            }
        }

        let mut form = ParameterForm::default();
        for (id, spec, initial) in decoded {
            spec.validate()?;
            store.ensure_initial(id, initial);

            if spec.has_slider() {
                let controller = match spec.kind {
                    FieldKind::BoundedRange => BoundController::Range(
                        RangeFieldController::initialize(
                            spec.clone(),
                            id,
                            RangeSliderModel::default(),
                            store,
                        )?,
                    ),
                    _ => BoundController::Scalar(ScalarFieldController::initialize(
                        spec.clone(),
                        id,
                        SliderModel::default(),
                        store,
                    )?),
                };
                log::debug!(target: "form.bind", "{id}: bound {} to a slider", spec.name);
                form.controllers.insert(id, controller);
            }
            form.fields.push((id, spec));
        }
        Ok(form)
    }

    /// Declared fields in document order.
    pub fn fields(&self) -> impl Iterator<Item = (InputId, &FieldSpec)> {
        self.fields.iter().map(|(id, spec)| (*id, spec))
    }

    pub fn controller(&self, id: InputId) -> Option<&BoundController> {
        self.controllers.get(&id)
    }

    /// Id of the field named `name`.
    pub fn id_of(&self, name: &str) -> Option<InputId> {
        self.fields
            .iter()
            .find(|(_, spec)| spec.name == name)
            .map(|(id, _)| *id)
    }

    /// Route `event` to its field's controller.
    ///
    /// Returns `true` if the event reached a controller and changed the
    /// slider or the text. Commits only reach the controller when the text
    /// differs from its previous commit.
    pub fn dispatch(&mut self, event: FieldEvent, store: &mut InputValueStore) -> bool {
        #[cfg(feature = "trace-events")]
        log::trace!(target: "form.bind", "dispatch {event:?}");

        let Some(controller) = self.controllers.get_mut(&event.id()) else {
            if let FieldEvent::Commit { id } = event {
                store.commit(id);
            }
            return false;
        };

        match (controller, event) {
            (BoundController::Range(c), FieldEvent::Drag { handle, value, .. }) => match handle {
                Some(handle) => c.drag(handle, value, store),
                None => c.drag_nearest(value, store),
            },
            (BoundController::Scalar(c), FieldEvent::Drag { value, .. }) => c.drag(value, store),
            (BoundController::Range(c), FieldEvent::Commit { id }) => {
                if !store.commit(id) {
                    return false;
                }
                c.on_text_changed(store);
                true
            }
            (BoundController::Scalar(c), FieldEvent::Commit { id }) => {
                if !store.commit(id) {
                    return false;
                }
                c.on_text_changed(store);
                true
            }
        }
    }

    /// Slider reading for `id`, correcting stale malformed text on the way.
    pub fn slider_reading(
        &mut self,
        id: InputId,
        store: &mut InputValueStore,
    ) -> Option<SliderReading> {
        Some(match self.controllers.get_mut(&id)? {
            BoundController::Range(c) => {
                let (low, high) = c.values(store);
                SliderReading::Range(low, high)
            }
            BoundController::Scalar(c) => SliderReading::Scalar(c.value(store)),
        })
    }

    /// Validation rules for every declared field.
    pub fn rules(&self) -> RuleSet {
        let specs: Vec<FieldSpec> = self.fields.iter().map(|(_, spec)| spec.clone()).collect();
        rules::build(&specs)
    }
}
