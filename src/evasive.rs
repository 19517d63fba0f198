//! State of a control that runs away from the pointer.
//!
//! The control keeps a running `Displacement` that the host renders as a CSS
//! translation. Each trigger measures the current box, picks a fresh on-screen
//! target and adds the difference to the running total. There is no debounce:
//! a burst of triggers is a burst of independent moves.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::{
    compute_evade_delta, compute_refit_delta, Delta, Displacement, ElementBox, Viewport,
};
use crate::rng::UniformSource;

/// What caused a reposition request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    PointerEnter,
    TouchStart,
    Resize,
}

impl Trigger {
    /// DOM event name the trigger is bound to.
    pub fn event_name(self) -> &'static str {
        match self {
            Trigger::PointerEnter => "mouseenter",
            Trigger::TouchStart => "touchstart",
            Trigger::Resize => "resize",
        }
    }

    /// Touch-start swallows the default action so the tap does not scroll or click.
    pub fn suppresses_default(self) -> bool {
        matches!(self, Trigger::TouchStart)
    }
}

#[derive(Clone, Debug)]
pub struct EvasiveControl {
    padding: f64,
    displacement: Displacement,
    moves: u32,
}

impl EvasiveControl {
    pub fn new(padding: f64) -> Self {
        Self {
            padding: padding.max(0.0),
            displacement: Displacement::default(),
            moves: 0,
        }
    }

    /// Render-time read of the running translation.
    pub fn displacement(&self) -> Displacement {
        self.displacement
    }

    /// Number of moves applied since mount.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Jump somewhere else on screen. `current` must be the rendered box,
    /// translation included.
    pub fn evade<R: UniformSource>(
        &mut self,
        current: ElementBox,
        viewport: Viewport,
        rng: &mut R,
    ) -> Delta {
        let delta = compute_evade_delta(current, viewport, self.padding, rng);
        self.apply(delta)
    }

    fn apply(&mut self, delta: Delta) -> Delta {
        self.displacement.accumulate(delta);
        self.moves += 1;
        delta
    }

    /// Resize re-check: only moves when the box is clipped by the viewport.
    /// A viewport too narrow for the full padding gets a reduced one, so a
    /// button that fits at all ends up unclipped.
    pub fn revalidate<R: UniformSource>(
        &mut self,
        current: ElementBox,
        viewport: Viewport,
        rng: &mut R,
    ) -> Option<Delta> {
        if current.is_outside(viewport) {
            let delta = compute_refit_delta(current, viewport, self.padding, rng);
            Some(self.apply(delta))
        } else {
            None
        }
    }

    /// Dispatch by trigger kind.
    pub fn handle<R: UniformSource>(
        &mut self,
        trigger: Trigger,
        current: ElementBox,
        viewport: Viewport,
        rng: &mut R,
    ) -> Option<Delta> {
        match trigger {
            Trigger::PointerEnter | Trigger::TouchStart => {
                Some(self.evade(current, viewport, rng))
            }
            Trigger::Resize => self.revalidate(current, viewport, rng),
        }
    }

    /// CSS `transform` value for the current displacement.
    pub fn transform_css(&self) -> String {
        format!(
            "translate({}px, {}px)",
            self.displacement.x, self.displacement.y
        )
    }
}

/// The surface an `EvasiveControl` is attached to: something that can be
/// measured and moved. The browser binding implements it over a DOM element.
pub trait ControlHost {
    /// Current rendered box, translation included.
    fn bounding_box(&self) -> ElementBox;
    fn viewport(&self) -> Viewport;
    /// Apply a CSS transform value.
    fn apply_transform(&self, css: &str);
}

/// A control while it is attached to a host.
pub struct Mounted<H: ControlHost, R: UniformSource> {
    pub host: H,
    pub control: EvasiveControl,
    pub rng: R,
}

/// Shared slot the event handlers reach through. Emptied on unmount, after
/// which every handler is a no-op.
pub type ControlSlot<H, R> = Rc<RefCell<Option<Mounted<H, R>>>>;

pub fn mount_slot<H: ControlHost, R: UniformSource>(
    host: H,
    padding: f64,
    rng: R,
) -> ControlSlot<H, R> {
    let mounted = Mounted {
        host,
        control: EvasiveControl::new(padding),
        rng,
    };
    mounted.host.apply_transform(&mounted.control.transform_css());
    Rc::new(RefCell::new(Some(mounted)))
}

/// Run one trigger against whatever is in the slot and re-render on a move.
pub fn dispatch<H: ControlHost, R: UniformSource>(
    slot: &ControlSlot<H, R>,
    trigger: Trigger,
) -> Option<Delta> {
    let mut guard = slot.borrow_mut();
    let m = guard.as_mut()?;
    let current = m.host.bounding_box();
    let viewport = m.host.viewport();
    let delta = m.control.handle(trigger, current, viewport, &mut m.rng)?;
    m.host.apply_transform(&m.control.transform_css());
    Some(delta)
}

/// Detach the control; returns its final state if it was still mounted.
pub fn unmount_slot<H: ControlHost, R: UniformSource>(
    slot: &ControlSlot<H, R>,
) -> Option<EvasiveControl> {
    slot.borrow_mut().take().map(|m| m.control)
}
