//! Exclusive execution window around the timing-critical part of a read.
//!
//! Bits are recovered by comparing pulse lengths measured in microsecond
//! ticks, so an interrupt or context switch during the transaction can flip
//! a bit. Platforms supply a [`TimingWindow`] that masks interrupts, raises
//! priority or otherwise keeps the read from being preempted. The driver
//! enters it before the request pulse and leaves it on every exit path.

/// A capability that keeps the current thread of control from being
/// preempted between [`enter`](Self::enter) and [`exit`](Self::exit).
///
/// The driver pairs every `enter` with exactly one `exit`, including when the
/// transaction fails.
///
/// # Example
///
/// ```ignore
/// struct Masked(Option<critical_section::RestoreState>);
///
/// impl TimingWindow for Masked {
///     fn enter(&mut self) {
///         self.0 = Some(unsafe { critical_section::acquire() });
///     }
///
///     fn exit(&mut self) {
///         if let Some(state) = self.0.take() {
///             unsafe { critical_section::release(state) };
///         }
///     }
/// }
/// ```
pub trait TimingWindow {
    /// Begins the exclusive region.
    fn enter(&mut self);

    /// Ends the exclusive region opened by the last `enter`.
    fn exit(&mut self);
}

impl<T: TimingWindow + ?Sized> TimingWindow for &mut T {
    fn enter(&mut self) {
        T::enter(self)
    }

    fn exit(&mut self) {
        T::exit(self)
    }
}

/// A window that does nothing, for targets where the read is not preempted
/// or where occasional checksum failures are acceptable.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unguarded;

impl TimingWindow for Unguarded {
    fn enter(&mut self) {}

    fn exit(&mut self) {}
}

/// Holds a window open until dropped.
pub(crate) struct Guard<'a, W: TimingWindow> {
    window: &'a mut W,
}

impl<'a, W: TimingWindow> Guard<'a, W> {
    pub(crate) fn enter(window: &'a mut W) -> Self {
        window.enter();
        Guard { window }
    }
}

impl<W: TimingWindow> Drop for Guard<'_, W> {
    fn drop(&mut self) {
        self.window.exit();
    }
}
