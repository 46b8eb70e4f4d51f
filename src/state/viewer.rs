/// Image viewer state machine
///
/// Governs which job image is selected and how it is presented:
///
/// ```text
/// Idle ──select──> Expanded ──click large image──> Fullscreen
///   ^                 |  ^                           |
///   └────escape───────┘  └──────escape (desktop)─────┘
///             (mobile escape / background click go straight to Idle)
/// ```
///
/// On narrow (mobile-width) windows there is no inline expanded view, so a
/// thumbnail click jumps directly to `Fullscreen` and escape closes it
/// entirely. The branch is taken on the live window width at click time,
/// not a device class captured at startup.
///
/// The selection is carried inside the enum variants, so an image index can
/// never exist without its job index and `Fullscreen` always has both.

/// Window widths below this are laid out (and navigated) as mobile.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Whether a window width uses the mobile interaction model.
pub fn is_mobile(width: f32) -> bool {
    width < MOBILE_BREAKPOINT
}

/// A (job, image) pair identifying one thumbnail on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub job: usize,
    pub image: usize,
}

/// The presentation state of the image viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerState {
    /// Nothing selected
    #[default]
    Idle,
    /// Inline large view of the selection, shown under its job row
    Expanded(Selection),
    /// Full-window overlay of the selection
    Fullscreen(Selection),
}

impl ViewerState {
    /// Handle a thumbnail click.
    ///
    /// - `Idle`: open the selection, inline on desktop, fullscreen on
    ///   mobile (mobile has no inline expanded view).
    /// - `Expanded` with the same pair: toggle closed.
    /// - Any other selected state: replace the selection, keeping the
    ///   current presentation.
    pub fn select(&mut self, job: usize, image: usize, mobile: bool) {
        let clicked = Selection { job, image };
        *self = match *self {
            ViewerState::Idle => {
                if mobile {
                    ViewerState::Fullscreen(clicked)
                } else {
                    ViewerState::Expanded(clicked)
                }
            }
            ViewerState::Expanded(current) if current == clicked => ViewerState::Idle,
            ViewerState::Expanded(_) => ViewerState::Expanded(clicked),
            ViewerState::Fullscreen(_) => ViewerState::Fullscreen(clicked),
        };
    }

    /// Click on the inline large image: promote `Expanded` to `Fullscreen`.
    /// No effect in any other state.
    pub fn open_fullscreen(&mut self) {
        if let ViewerState::Expanded(selection) = *self {
            *self = ViewerState::Fullscreen(selection);
        }
    }

    /// Escape key: step back to the parent state.
    ///
    /// `Fullscreen` returns to `Expanded` on desktop; on mobile there is
    /// no expanded view to return to, so it closes entirely. `Expanded`
    /// always closes. Terminal exit is `Idle`.
    pub fn escape(&mut self, mobile: bool) {
        *self = match *self {
            ViewerState::Fullscreen(selection) if !mobile => ViewerState::Expanded(selection),
            ViewerState::Fullscreen(_) => ViewerState::Idle,
            ViewerState::Expanded(_) | ViewerState::Idle => ViewerState::Idle,
        };
    }

    /// Click on the fullscreen backdrop: close everything.
    pub fn dismiss(&mut self) {
        *self = ViewerState::Idle;
    }

    /// Move the selected image within the current job by `delta`
    /// (chevrons, arrow keys). Clamped to `[0, image_count)`; no wrap.
    pub fn step(&mut self, delta: isize, image_count: usize) {
        if image_count == 0 {
            return;
        }
        let stepped = |selection: Selection| {
            let max = image_count - 1;
            let image = selection.image.min(max).saturating_add_signed(delta).min(max);
            Selection { image, ..selection }
        };
        *self = match *self {
            ViewerState::Idle => ViewerState::Idle,
            ViewerState::Expanded(s) => ViewerState::Expanded(stepped(s)),
            ViewerState::Fullscreen(s) => ViewerState::Fullscreen(stepped(s)),
        };
    }

    /// The current selection, if any state is open.
    pub fn selection(&self) -> Option<Selection> {
        match *self {
            ViewerState::Idle => None,
            ViewerState::Expanded(s) | ViewerState::Fullscreen(s) => Some(s),
        }
    }

    /// Whether the fullscreen overlay is up.
    pub fn is_fullscreen(&self) -> bool {
        matches!(self, ViewerState::Fullscreen(_))
    }

    /// Whether any selection is open (the key listener is bound only
    /// while this is true).
    pub fn is_active(&self) -> bool {
        !matches!(self, ViewerState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: bool = false;
    const MOBILE: bool = true;

    #[test]
    fn test_breakpoint_classification() {
        assert!(!is_mobile(1024.0));
        assert!(is_mobile(400.0));
        assert!(is_mobile(767.9));
        assert!(!is_mobile(768.0));
    }

    #[test]
    fn test_desktop_click_expands_then_toggles_closed() {
        // Desktop-width scenario: click image 1 of job 0, then click it again
        let mut viewer = ViewerState::default();
        viewer.select(0, 1, is_mobile(1024.0));
        assert_eq!(
            viewer,
            ViewerState::Expanded(Selection { job: 0, image: 1 })
        );

        viewer.select(0, 1, is_mobile(1024.0));
        assert_eq!(viewer, ViewerState::Idle);
    }

    #[test]
    fn test_mobile_click_goes_straight_to_fullscreen() {
        // Mobile-width scenario: no inline expanded step
        let mut viewer = ViewerState::default();
        viewer.select(1, 2, is_mobile(400.0));
        assert_eq!(
            viewer,
            ViewerState::Fullscreen(Selection { job: 1, image: 2 })
        );
    }

    #[test]
    fn test_expanded_replaces_selection_across_jobs() {
        let mut viewer = ViewerState::default();
        viewer.select(0, 0, DESKTOP);
        viewer.select(2, 3, DESKTOP);
        assert_eq!(
            viewer,
            ViewerState::Expanded(Selection { job: 2, image: 3 })
        );
    }

    #[test]
    fn test_large_image_click_opens_fullscreen() {
        let mut viewer = ViewerState::default();
        viewer.select(0, 1, DESKTOP);
        viewer.open_fullscreen();
        assert_eq!(
            viewer,
            ViewerState::Fullscreen(Selection { job: 0, image: 1 })
        );
    }

    #[test]
    fn test_open_fullscreen_is_inert_when_idle() {
        let mut viewer = ViewerState::Idle;
        viewer.open_fullscreen();
        assert_eq!(viewer, ViewerState::Idle);
    }

    #[test]
    fn test_escape_from_fullscreen_desktop_returns_to_expanded() {
        let mut viewer = ViewerState::Fullscreen(Selection { job: 0, image: 1 });
        viewer.escape(DESKTOP);
        assert_eq!(
            viewer,
            ViewerState::Expanded(Selection { job: 0, image: 1 })
        );
    }

    #[test]
    fn test_escape_from_fullscreen_mobile_closes_entirely() {
        let mut viewer = ViewerState::Fullscreen(Selection { job: 1, image: 2 });
        viewer.escape(MOBILE);
        assert_eq!(viewer, ViewerState::Idle);
    }

    #[test]
    fn test_escape_chain_always_terminates_at_idle() {
        let mut viewer = ViewerState::default();
        viewer.select(0, 0, DESKTOP);
        viewer.open_fullscreen();
        viewer.escape(DESKTOP);
        viewer.escape(DESKTOP);
        assert_eq!(viewer, ViewerState::Idle);
        // Escape at Idle stays at Idle
        viewer.escape(DESKTOP);
        assert_eq!(viewer, ViewerState::Idle);
    }

    #[test]
    fn test_background_click_dismisses_fullscreen() {
        let mut viewer = ViewerState::Fullscreen(Selection { job: 0, image: 0 });
        viewer.dismiss();
        assert_eq!(viewer, ViewerState::Idle);
    }

    #[test]
    fn test_step_clamps_at_both_ends() {
        let mut viewer = ViewerState::Expanded(Selection { job: 0, image: 0 });
        viewer.step(-1, 3);
        assert_eq!(viewer.selection().unwrap().image, 0);

        viewer.step(1, 3);
        viewer.step(1, 3);
        viewer.step(1, 3);
        assert_eq!(viewer.selection().unwrap().image, 2);
    }

    #[test]
    fn test_step_preserves_presentation_and_job() {
        let mut viewer = ViewerState::Fullscreen(Selection { job: 1, image: 1 });
        viewer.step(1, 4);
        assert_eq!(
            viewer,
            ViewerState::Fullscreen(Selection { job: 1, image: 2 })
        );
    }

    #[test]
    fn test_step_when_idle_stays_idle() {
        let mut viewer = ViewerState::Idle;
        viewer.step(1, 4);
        assert_eq!(viewer, ViewerState::Idle);
        assert!(viewer.selection().is_none());
    }

    #[test]
    fn test_no_dangling_image_index_over_random_walk() {
        // Drive the machine through a mixed action sequence and check the
        // selection invariant after every transition: an image index is
        // only ever observable together with its job index.
        let mut viewer = ViewerState::default();
        let actions: &[&dyn Fn(&mut ViewerState)] = &[
            &|v| v.select(0, 1, DESKTOP),
            &|v| v.open_fullscreen(),
            &|v| v.step(1, 4),
            &|v| v.escape(DESKTOP),
            &|v| v.select(2, 0, MOBILE),
            &|v| v.dismiss(),
            &|v| v.select(1, 3, MOBILE),
            &|v| v.escape(MOBILE),
            &|v| v.step(-1, 4),
            &|v| v.select(0, 0, DESKTOP),
            &|v| v.select(0, 0, DESKTOP),
        ];

        for action in actions {
            action(&mut viewer);
            match viewer {
                ViewerState::Idle => assert!(viewer.selection().is_none()),
                ViewerState::Expanded(s) | ViewerState::Fullscreen(s) => {
                    let got = viewer.selection().expect("open state must select");
                    assert_eq!(got, s);
                }
            }
            if viewer.is_fullscreen() {
                assert!(viewer.selection().is_some());
            }
        }
    }
}
