//! UI-toolkit-independent editing controller.
//!
//! The generation engine is pure; everything stateful about the toy (which
//! face is selected, the editable palette, the current parameters) lives
//! here instead of in globals. A host UI forwards its events (slider moves,
//! face clicks, color picks) to the controller and re-renders from
//! [`IllusionController::regenerate`]; interested parties observe changes
//! through [`ControllerObserver`] without depending on any widget toolkit.

use crate::error::IllusionError;
use crate::illusion::{generate, PolygonSpec};

/// Which face, if any, is currently selected for color editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Index of the selected face, `None` when nothing is selected.
    pub face_index: Option<usize>,
}

/// Callbacks for controller state changes.
///
/// Both methods have empty default bodies so an observer can implement only
/// the events it cares about.
pub trait ControllerObserver {
    /// Called after the selection changed; `None` means it was cleared.
    fn on_face_selected(&mut self, _face_index: Option<usize>) {}

    /// Called after any generation parameter changed.
    fn on_parameters_changed(&mut self, _spec: &PolygonSpec<f64>) {}
}

/// Owns the mutable editing state around the pure generation engine.
pub struct IllusionController {
    spec: PolygonSpec<f64>,
    palette: Vec<String>,
    selection: SelectionState,
    observers: Vec<Box<dyn ControllerObserver>>,
}

impl IllusionController {
    /// Creates a controller with the given starting parameters and palette.
    pub fn new(spec: PolygonSpec<f64>, palette: Vec<String>) -> Self {
        Self {
            spec,
            palette,
            selection: SelectionState::default(),
            observers: Vec::new(),
        }
    }

    /// Returns the current generation parameters.
    pub fn spec(&self) -> &PolygonSpec<f64> {
        &self.spec
    }

    /// Returns the current palette.
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Returns the current selection.
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    /// Registers an observer for selection and parameter changes.
    pub fn add_observer(&mut self, observer: Box<dyn ControllerObserver>) {
        self.observers.push(observer);
    }

    /// Selects the face at `index` for color editing.
    pub fn select_face(&mut self, index: usize) -> Result<(), IllusionError> {
        let face_count = self.spec.edge_count as usize;
        if index >= face_count {
            return Err(IllusionError::FaceIndexOutOfRange { index, face_count });
        }
        self.selection.face_index = Some(index);
        self.notify_selection();
        Ok(())
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        if self.selection.face_index.take().is_some() {
            self.notify_selection();
        }
    }

    /// Recolors the selected face's palette slot.
    ///
    /// The slot is `index % palette.len()`, matching the cyclic color
    /// assignment at generation time, so the edit also applies to every
    /// other face sharing that slot. The edit takes effect on the next
    /// [`regenerate`](Self::regenerate); a host that already holds rendered
    /// `<polygon>` elements may instead patch their `fill` attributes
    /// directly.
    pub fn set_face_color(&mut self, color: impl Into<String>) -> Result<(), IllusionError> {
        let index = self
            .selection
            .face_index
            .ok_or(IllusionError::NoFaceSelected)?;

        let color = color.into();
        if self.palette.is_empty() {
            self.palette.push(color);
        } else {
            let slot = index % self.palette.len();
            self.palette[slot] = color;
        }
        Ok(())
    }

    /// Sets the edge count, dropping a selection it would invalidate.
    pub fn set_edge_count(&mut self, edge_count: u32) -> Result<(), IllusionError> {
        self.update_spec(PolygonSpec::new(
            edge_count,
            self.spec.mirrored,
            self.spec.thickness,
            self.spec.perspective,
        )?);

        if let Some(index) = self.selection.face_index {
            if index >= edge_count as usize {
                self.selection.face_index = None;
                self.notify_selection();
            }
        }
        Ok(())
    }

    /// Sets the mirrored flag.
    ///
    /// Infallible: mirroring cannot invalidate the other parameters.
    pub fn set_mirrored(&mut self, mirrored: bool) {
        let mut spec = self.spec;
        spec.mirrored = mirrored;
        self.update_spec(spec);
    }

    /// Sets the thickness parameter (clamped into [0, 1]).
    pub fn set_thickness(&mut self, thickness: f64) -> Result<(), IllusionError> {
        self.update_spec(PolygonSpec::new(
            self.spec.edge_count,
            self.spec.mirrored,
            thickness,
            self.spec.perspective,
        )?);
        Ok(())
    }

    /// Sets the perspective parameter (clamped into [0, 1]).
    pub fn set_perspective(&mut self, perspective: f64) -> Result<(), IllusionError> {
        self.update_spec(PolygonSpec::new(
            self.spec.edge_count,
            self.spec.mirrored,
            self.spec.thickness,
            perspective,
        )?);
        Ok(())
    }

    /// Re-runs the engine with the current parameters and palette.
    pub fn regenerate(&self) -> Result<String, IllusionError> {
        generate(&self.spec, &self.palette)
    }

    fn update_spec(&mut self, spec: PolygonSpec<f64>) {
        self.spec = spec;
        for observer in &mut self.observers {
            observer.on_parameters_changed(&spec);
        }
    }

    fn notify_selection(&mut self) {
        let selection = self.selection.face_index;
        for observer in &mut self.observers {
            observer.on_face_selected(selection);
        }
    }
}
