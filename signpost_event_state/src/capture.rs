// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform capabilities a drag tracker needs from its UI toolkit.

use core::num::NonZeroU64;

/// Pointer identifier for the pointer driving a gesture.
pub type PointerId = NonZeroU64;

/// Overrides of default pointer behavior.
///
/// On the web, `suppress_capture` maps to `releasePointerCapture` on the press
/// target and `suppress_default_cancel` to `preventDefault` on `pointercancel`.
pub trait PointerCapability {
    /// Releases any implicit pointer capture granted on press, so move events
    /// keep arriving after the pointer leaves the element bounds.
    fn suppress_capture(&mut self, pointer: PointerId);

    /// Cancels the platform's default handling of a pointer-cancel, so an
    /// in-progress drag is not aborted by native scrolling or panning.
    fn suppress_default_cancel(&mut self);
}

/// Registration of the tracker's pointer listeners on an element.
///
/// A tracker attaches at most one listener set at a time and always detaches
/// from the old element before attaching to a new one.
pub trait ListenerRegistry<E> {
    /// Installs the down/move/up/cancel listeners on `element`.
    fn attach(&mut self, element: &E);

    /// Removes every listener previously installed on `element`.
    fn detach(&mut self, element: &E);
}
