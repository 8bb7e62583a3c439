//! Click-to-select registry.
//!
//! The [`Picker`] owns the set of pickable objects, answers "what is under
//! this pointer" by casting a camera ray, and tracks a single selection. When
//! an object becomes selected its emissive highlight is captured and replaced
//! with the selected value; when it stops being selected the captured value
//! is written back.

use std::fmt;

use glam::{Vec2, Vec3};
use smallvec::SmallVec;

use crate::camera::Camera;
use crate::color::Color;
use crate::constants::{NO_SELECTION_TEXT, SELECTED_EMISSIVE};
use crate::picking::{Bounds, Ray};

/// Opaque handle for a pickable object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Metadata shown when an object is selected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectInfo {
    pub position: Vec3,
    /// Width, height, depth.
    pub size: Vec3,
}

impl fmt::Display for ObjectInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.position;
        let s = self.size;
        writeln!(f, "Position")?;
        writeln!(f, "x: {:.2}", p.x)?;
        writeln!(f, "y: {:.2}", p.y)?;
        writeln!(f, "z: {:.2}", p.z)?;
        writeln!(f, "Size")?;
        writeln!(f, "width: {:.2}", s.x)?;
        writeln!(f, "height: {:.2}", s.y)?;
        write!(f, "depth: {:.2}", s.z)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PickableObject {
    pub id: ObjectId,
    pub bounds: Bounds,
    /// Current highlight (emissive) value.
    pub emissive: Color,
    pub info: ObjectInfo,
}

impl PickableObject {
    pub fn new(id: ObjectId, bounds: Bounds, emissive: Color, info: ObjectInfo) -> Self {
        Self {
            id,
            bounds,
            emissive,
            info,
        }
    }
}

/// A ray intersection with a registered object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub id: ObjectId,
    pub distance: f32,
    pub point: Vec3,
}

/// Payload of the selection hook.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectionChange {
    Selected { id: ObjectId, info: ObjectInfo },
    Cleared,
}

impl fmt::Display for SelectionChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionChange::Selected { info, .. } => info.fmt(f),
            SelectionChange::Cleared => f.write_str(NO_SELECTION_TEXT),
        }
    }
}

pub type SelectionHook = Box<dyn FnMut(&SelectionChange)>;

#[derive(Clone, Copy, Debug)]
struct Selected {
    id: ObjectId,
    previous: Color,
}

pub struct Picker {
    // registration order doubles as the tie-break order
    objects: Vec<PickableObject>,
    selected: Option<Selected>,
    selected_highlight: Color,
    hook: Option<SelectionHook>,
}

impl Default for Picker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Picker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Picker")
            .field("objects", &self.objects.len())
            .field("selected", &self.selected())
            .field("selected_highlight", &self.selected_highlight)
            .finish()
    }
}

impl Picker {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            selected: None,
            selected_highlight: Color(SELECTED_EMISSIVE),
            hook: None,
        }
    }

    pub fn with_selected_highlight(mut self, color: Color) -> Self {
        self.selected_highlight = color;
        self
    }

    pub fn set_selection_hook(&mut self, hook: impl FnMut(&SelectionChange) + 'static) {
        self.hook = Some(Box::new(hook));
    }

    pub fn register(&mut self, object: PickableObject) -> ObjectId {
        let id = object.id;
        self.objects.push(object);
        id
    }

    /// Remove an object, deselecting it first if needed so its highlight is
    /// restored before it is handed back.
    pub fn unregister(&mut self, id: ObjectId) -> Option<PickableObject> {
        let Some(index) = self.index_of(id) else {
            log::warn!("unregister: unknown object {}", id);
            return None;
        };
        if self.selected().is_some_and(|s| s == id) {
            self.select(None);
        }
        Some(self.objects.remove(index))
    }

    pub fn set_bounds(&mut self, id: ObjectId, bounds: Bounds) {
        match self.index_of(id) {
            Some(i) => self.objects[i].bounds = bounds,
            None => log::warn!("set_bounds: unknown object {}", id),
        }
    }

    /// Nearest registered object under the pointer, if any.
    pub fn pick(&self, pointer_ndc: Vec2, camera: &Camera) -> Option<ObjectId> {
        self.pick_ray(&camera.ray_from_ndc(pointer_ndc)).map(|h| h.id)
    }

    /// Nearest hit along `ray`. Equal distances resolve to the earliest
    /// registered object.
    pub fn pick_ray(&self, ray: &Ray) -> Option<Hit> {
        let mut best: Option<Hit> = None;
        for obj in &self.objects {
            let Some(t) = obj.bounds.intersect(ray) else {
                continue;
            };
            match best {
                Some(b) if t >= b.distance => {}
                _ => {
                    best = Some(Hit {
                        id: obj.id,
                        distance: t,
                        point: ray.at(t),
                    })
                }
            }
        }
        best
    }

    /// Every hit along `ray`, nearest first.
    pub fn pick_all(&self, ray: &Ray) -> SmallVec<[Hit; 8]> {
        let mut hits: SmallVec<[Hit; 8]> = self
            .objects
            .iter()
            .filter_map(|obj| {
                obj.bounds.intersect(ray).map(|t| Hit {
                    id: obj.id,
                    distance: t,
                    point: ray.at(t),
                })
            })
            .collect();
        // stable sort keeps registration order for equal distances
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    /// Make `target` the selection. Re-selecting the current object does
    /// nothing; selecting an unknown id clears the selection.
    pub fn select(&mut self, target: Option<ObjectId>) {
        let target = target.and_then(|id| match self.index_of(id) {
            Some(i) => Some((id, i)),
            None => {
                log::warn!("select: unknown object {}", id);
                None
            }
        });
        if target.map(|(id, _)| id) == self.selected() {
            return;
        }

        if let Some(prev) = self.selected.take() {
            if let Some(i) = self.index_of(prev.id) {
                self.objects[i].emissive = prev.previous;
            }
        }

        let change = match target {
            Some((id, i)) => {
                let obj = &mut self.objects[i];
                self.selected = Some(Selected {
                    id,
                    previous: obj.emissive,
                });
                obj.emissive = self.selected_highlight;
                SelectionChange::Selected { id, info: obj.info }
            }
            None => SelectionChange::Cleared,
        };

        log::debug!("selection changed: {:?}", change);
        if let Some(hook) = self.hook.as_mut() {
            hook(&change);
        }
    }

    pub fn selected(&self) -> Option<ObjectId> {
        self.selected.map(|s| s.id)
    }

    pub fn highlight(&self, id: ObjectId) -> Option<Color> {
        self.get(id).map(|o| o.emissive)
    }

    pub fn info(&self, id: ObjectId) -> Option<ObjectInfo> {
        self.get(id).map(|o| o.info)
    }

    pub fn get(&self, id: ObjectId) -> Option<&PickableObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PickableObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|o| o.id == id)
    }
}
