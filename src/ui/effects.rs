/// Decorative canvas backdrop
///
/// Purely cosmetic: a vignette that leans away from the pointer with a
/// little inertia, and a slowly spinning field of accent-colored dots
/// behind the content. Keyed off the current theme colors and redrawn from
/// the frame subscription; it reads no application state and produces no
/// messages.

use cgmath::{InnerSpace, Vector2, Zero};
use iced::mouse::Cursor;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use crate::color;
use crate::Message;

/// Spring constants for the pointer-follow motion. Soft enough that the
/// vignette visibly lags the cursor.
const STIFFNESS: f32 = 24.0;
const DAMPING: f32 = 7.0;

/// How far (in px) the vignette center drifts at full pointer deflection.
const DRIFT_PX: f32 = 48.0;

const DOT_COUNT: usize = 110;
const GOLDEN_ANGLE: f32 = 2.399_963;

/// Damped spring tracking the normalized pointer position.
/// Updated every animation frame; read by the backdrop draw.
#[derive(Debug, Clone, Copy)]
pub struct PointerSpring {
    target: Vector2<f32>,
    current: Vector2<f32>,
    velocity: Vector2<f32>,
}

impl Default for PointerSpring {
    fn default() -> Self {
        PointerSpring {
            target: Vector2::zero(),
            current: Vector2::zero(),
            velocity: Vector2::zero(),
        }
    }
}

impl PointerSpring {
    /// Set the pointer position, normalized to -1..1 in both axes.
    pub fn set_target(&mut self, target: Vector2<f32>) {
        self.target = target;
    }

    /// Advance the spring by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        // Clamp so a long frame gap cannot explode the integration
        let dt = dt.clamp(0.0, 0.05);
        let displacement = self.target - self.current;
        self.velocity += displacement * STIFFNESS * dt;
        self.velocity *= (1.0 - DAMPING * dt).max(0.0);
        self.current += self.velocity * dt;
    }

    /// The smoothed offset, same -1..1 space as the target.
    pub fn offset(&self) -> Vector2<f32> {
        self.current
    }
}

/// The backdrop canvas program. Rebuilt every frame from the app state;
/// holds no state of its own.
pub struct Backdrop {
    pub accent: Color,
    pub dark: bool,
    /// Seconds since launch, drives the dot-field rotation
    pub elapsed: f32,
    /// Smoothed pointer offset from the spring
    pub offset: Vector2<f32>,
}

impl canvas::Program<Message> for Backdrop {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let center = Point::new(
            bounds.width / 2.0 + self.offset.x * DRIFT_PX,
            bounds.height / 2.0 + self.offset.y * DRIFT_PX,
        );
        let max_dim = bounds.width.max(bounds.height);

        self.draw_dots(&mut frame, center, max_dim);
        self.draw_vignette(&mut frame, center, max_dim);

        vec![frame.into_geometry()]
    }
}

impl Backdrop {
    /// Spiral dot field, phyllotaxis layout, one slow rotation per ~2 min.
    fn draw_dots(&self, frame: &mut Frame, center: Point, max_dim: f32) {
        let alpha = if self.dark { 0.16 } else { 0.10 };
        let fill = color::with_alpha(self.accent, alpha);
        let spin = self.elapsed * 0.05;

        for i in 0..DOT_COUNT {
            let t = i as f32 / DOT_COUNT as f32;
            let angle = i as f32 * GOLDEN_ANGLE + spin;
            let radius = t.sqrt() * max_dim * 0.62;
            let position = Point::new(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            );
            let dot_radius = 1.0 + (i % 3) as f32 * 0.7;
            frame.fill(&Path::circle(position, dot_radius), fill);
        }
    }

    /// Concentric translucent rings darkening toward the edges. Offsetting
    /// their shared center by the pointer spring is what produces the
    /// parallax feel.
    fn draw_vignette(&self, frame: &mut Frame, center: Point, max_dim: f32) {
        let base = if self.dark {
            Color::BLACK
        } else {
            color::mix(Color::BLACK, self.accent, 0.35)
        };
        let band = max_dim * 0.13;

        for i in 0..5 {
            let alpha = 0.035 * (i + 1) as f32;
            let radius = max_dim * 0.58 + band * i as f32;
            frame.stroke(
                &Path::circle(center, radius),
                Stroke::default()
                    .with_width(band * 1.4)
                    .with_color(color::with_alpha(base, alpha)),
            );
        }
    }
}

/// Normalize a window-space pointer position to the -1..1 offset space.
pub fn normalize_pointer(position: Point, width: f32, height: f32) -> Vector2<f32> {
    if width <= 0.0 || height <= 0.0 {
        return Vector2::zero();
    }
    Vector2::new(
        (position.x / width) * 2.0 - 1.0,
        (position.y / height) * 2.0 - 1.0,
    )
}
