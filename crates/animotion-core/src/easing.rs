//! Easing functions for preview playback.
//!
//! Timing-function tokens stay opaque everywhere else in the crate. The
//! preview sampler needs an actual curve, so this module reads one out of a
//! token leniently:
//! - Linear
//! - Ease, EaseIn, EaseOut, EaseInOut (standard CSS curves)
//! - CubicBezier (custom bezier curves)
//! - Steps (stepped animations, including `step-start`/`step-end`)
//!
//! # Usage
//!
//! ```
//! use animotion_core::easing::EasingFunction;
//!
//! let ease = EasingFunction::from_timing_token("ease-out infinite alternate");
//! assert_eq!(ease, EasingFunction::EaseOut);
//! let progress = ease.evaluate(0.5);
//! assert!(progress > 0.5);
//! ```

use serde::{Deserialize, Serialize};

/// Position for stepped animations.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepPosition {
    /// Jump at the start of each interval (CSS `jump-start` / `start`).
    Start,
    /// Jump at the end of each interval (CSS `jump-end` / `end`).
    #[default]
    End,
    /// Jump at both start and end (CSS `jump-both`).
    Both,
    /// No jump at start or end (CSS `jump-none`).
    None,
}

impl StepPosition {
    fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "start" | "jump-start" => Some(Self::Start),
            "end" | "jump-end" => Some(Self::End),
            "jump-both" => Some(Self::Both),
            "jump-none" => Some(Self::None),
            _ => None,
        }
    }
}

/// Easing function for animation timing.
///
/// Maps linear progress (0.0 to 1.0) to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EasingFunction {
    Linear,

    /// CSS `ease`, equivalent to `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    /// This is the CSS initial value.
    #[default]
    Ease,

    /// CSS `ease-in`, equivalent to `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,

    /// CSS `ease-out`, equivalent to `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,

    /// CSS `ease-in-out`, equivalent to `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,

    /// Custom cubic bezier curve. x values lie in [0, 1].
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },

    /// Stepped animation with `count >= 1` discrete intervals.
    Steps { count: u32, position: StepPosition },
}

impl EasingFunction {
    /// Evaluate the easing function at progress `t`, clamped to [0, 1].
    ///
    /// Bezier curves with overshoot may return values outside 0.0-1.0.
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(*x1, *y1, *x2, *y2, t),
            Self::Steps { count, position } => stepped(*count, *position, t),
        }
    }

    /// Read an easing curve from a free-form timing token.
    ///
    /// The token may carry extra shorthand words (`linear infinite`,
    /// `ease-out infinite alternate`); the first term that names a curve
    /// wins. Tokens with no recognizable curve yield `Ease`.
    pub fn from_timing_token(token: &str) -> Self {
        split_terms(token)
            .into_iter()
            .find_map(parse_term)
            .unwrap_or_default()
    }
}

/// Split a token on whitespace that is not nested inside parentheses.
fn split_terms(token: &str) -> Vec<&str> {
    let mut terms = Vec::new();
    let mut depth = 0usize;
    let mut start = None;

    for (i, c) in token.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    terms.push(&token[s..i]);
                }
                continue;
            }
            _ => {}
        }
        if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        terms.push(&token[s..]);
    }
    terms
}

fn parse_term(term: &str) -> Option<EasingFunction> {
    let term = term.trim().to_ascii_lowercase();
    match term.as_str() {
        "linear" => return Some(EasingFunction::Linear),
        "ease" => return Some(EasingFunction::Ease),
        "ease-in" => return Some(EasingFunction::EaseIn),
        "ease-out" => return Some(EasingFunction::EaseOut),
        "ease-in-out" => return Some(EasingFunction::EaseInOut),
        "step-start" => {
            return Some(EasingFunction::Steps {
                count: 1,
                position: StepPosition::Start,
            });
        }
        "step-end" => {
            return Some(EasingFunction::Steps {
                count: 1,
                position: StepPosition::End,
            });
        }
        _ => {}
    }

    if let Some(args) = function_args(&term, "cubic-bezier") {
        let values = args
            .iter()
            .map(|a| a.parse::<f64>().ok())
            .collect::<Option<Vec<_>>>()?;
        let [x1, y1, x2, y2] = values.as_slice() else {
            return None;
        };
        if !(0.0..=1.0).contains(x1) || !(0.0..=1.0).contains(x2) {
            return None;
        }
        return Some(EasingFunction::CubicBezier {
            x1: *x1,
            y1: *y1,
            x2: *x2,
            y2: *y2,
        });
    }

    if let Some(args) = function_args(&term, "steps") {
        let count = args.first()?.parse::<u32>().ok().filter(|c| *c >= 1)?;
        let position = match args.get(1) {
            Some(keyword) => StepPosition::parse(keyword)?,
            None => StepPosition::End,
        };
        if args.len() > 2 || (position == StepPosition::None && count < 2) {
            return None;
        }
        return Some(EasingFunction::Steps { count, position });
    }

    None
}

/// Extract comma-separated arguments of `name(...)`.
fn function_args<'a>(term: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let inner = term.strip_prefix(name)?.strip_prefix('(')?.strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

/// Evaluate a cubic bezier curve at progress.
///
/// Newton-Raphson finds the curve parameter whose x matches the progress;
/// the y coordinate at that parameter is the eased value.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, progress: f64) -> f64 {
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }

    let t = solve_bezier_x(x1, x2, progress);
    bezier_coord(y1, y2, t)
}

fn solve_bezier_x(x1: f64, x2: f64, target_x: f64) -> f64 {
    let mut t = target_x;

    for _ in 0..8 {
        let x = bezier_coord(x1, x2, t) - target_x;
        if x.abs() < 1e-7 {
            break;
        }

        let dx = bezier_derivative(x1, x2, t);
        if dx.abs() < 1e-7 {
            break;
        }

        t = (t - x / dx).clamp(0.0, 1.0);
    }

    t
}

/// One coordinate of the curve: 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³
#[inline]
fn bezier_coord(p1: f64, p2: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

/// d/dt = 3(1-t)²·p1 + 6(1-t)t·(p2-p1) + 3t²·(1-p2)
#[inline]
fn bezier_derivative(p1: f64, p2: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

fn stepped(steps: u32, position: StepPosition, t: f64) -> f64 {
    if steps == 0 {
        return t;
    }

    let n = f64::from(steps);
    match position {
        StepPosition::Start => (((t * n).floor() + 1.0) / n).min(1.0),
        StepPosition::End => (t * n).floor() / n,
        StepPosition::Both => (((t * n).floor() + 1.0) / (n + 1.0)).min(1.0),
        StepPosition::None => {
            if steps == 1 {
                0.5
            } else {
                ((t * n).floor() / (n - 1.0)).min(1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.001;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_linear() {
        let ease = EasingFunction::Linear;
        assert!(approx_eq(ease.evaluate(0.25), 0.25));
        assert!(approx_eq(ease.evaluate(0.75), 0.75));
    }

    #[test]
    fn test_named_curves_hit_endpoints() {
        for ease in [
            EasingFunction::Ease,
            EasingFunction::EaseIn,
            EasingFunction::EaseOut,
            EasingFunction::EaseInOut,
        ] {
            assert!(approx_eq(ease.evaluate(0.0), 0.0), "{ease:?} at 0");
            assert!(approx_eq(ease.evaluate(1.0), 1.0), "{ease:?} at 1");
        }
    }

    #[test]
    fn test_curve_shapes() {
        assert!(EasingFunction::EaseIn.evaluate(0.25) < 0.25);
        assert!(EasingFunction::EaseOut.evaluate(0.25) > 0.25);
        assert!(approx_eq(EasingFunction::EaseInOut.evaluate(0.5), 0.5));
        let mid = EasingFunction::Ease.evaluate(0.5);
        assert!(mid > 0.7 && mid < 0.9, "CSS ease mid-point should be ~0.8, got {mid}");
    }

    #[test]
    fn test_back_curve_overshoots() {
        let back = EasingFunction::from_timing_token("cubic-bezier(0.175, 0.885, 0.32, 1.275)");
        let peak = (1..100)
            .map(|i| back.evaluate(f64::from(i) / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_steps() {
        let ease = EasingFunction::Steps {
            count: 4,
            position: StepPosition::End,
        };
        assert!(approx_eq(ease.evaluate(0.24), 0.0));
        assert!(approx_eq(ease.evaluate(0.5), 0.5));
        assert!(approx_eq(ease.evaluate(1.0), 1.0));

        let ease = EasingFunction::Steps {
            count: 4,
            position: StepPosition::Start,
        };
        assert!(approx_eq(ease.evaluate(0.0), 0.25));
        assert!(approx_eq(ease.evaluate(0.01), 0.25));
        assert!(approx_eq(ease.evaluate(0.25), 0.5));
        assert!(approx_eq(ease.evaluate(0.76), 1.0));
        assert!(approx_eq(ease.evaluate(1.0), 1.0));

        // n + 1 output levels, never 0 or 1 before the end.
        let ease = EasingFunction::from_timing_token("steps(3, jump-both)");
        assert!(approx_eq(ease.evaluate(0.0), 0.25));
        assert!(approx_eq(ease.evaluate(0.5), 0.5));
        assert!(approx_eq(ease.evaluate(0.9), 0.75));
        assert!(approx_eq(ease.evaluate(1.0), 1.0));

        let ease = EasingFunction::Steps {
            count: 3,
            position: StepPosition::None,
        };
        assert!(approx_eq(ease.evaluate(0.0), 0.0));
        assert!(approx_eq(ease.evaluate(0.5), 0.5));
        assert!(approx_eq(ease.evaluate(1.0), 1.0));
    }

    #[test]
    fn test_clamping() {
        let ease = EasingFunction::Ease;
        assert!(approx_eq(ease.evaluate(-0.5), 0.0));
        assert!(approx_eq(ease.evaluate(1.5), 1.0));
    }

    #[test]
    fn test_token_keywords() {
        assert_eq!(EasingFunction::from_timing_token("linear"), EasingFunction::Linear);
        assert_eq!(EasingFunction::from_timing_token(" EASE-IN "), EasingFunction::EaseIn);
        assert_eq!(
            EasingFunction::from_timing_token("linear infinite"),
            EasingFunction::Linear
        );
        assert_eq!(
            EasingFunction::from_timing_token("ease-out infinite alternate"),
            EasingFunction::EaseOut
        );
        assert_eq!(
            EasingFunction::from_timing_token("step-start"),
            EasingFunction::Steps {
                count: 1,
                position: StepPosition::Start
            }
        );
    }

    #[test]
    fn test_token_functions() {
        assert_eq!(
            EasingFunction::from_timing_token("cubic-bezier(0.16, 1, 0.3, 1)"),
            EasingFunction::CubicBezier {
                x1: 0.16,
                y1: 1.0,
                x2: 0.3,
                y2: 1.0
            }
        );
        assert_eq!(
            EasingFunction::from_timing_token("steps(3, jump-both)"),
            EasingFunction::Steps {
                count: 3,
                position: StepPosition::Both
            }
        );
        assert_eq!(
            EasingFunction::from_timing_token("steps(5)"),
            EasingFunction::Steps {
                count: 5,
                position: StepPosition::End
            }
        );
    }

    #[test]
    fn test_unrecognized_tokens_fall_back_to_ease() {
        assert_eq!(EasingFunction::from_timing_token("infinite"), EasingFunction::Ease);
        assert_eq!(EasingFunction::from_timing_token("both"), EasingFunction::Ease);
        assert_eq!(EasingFunction::from_timing_token(""), EasingFunction::Ease);
        assert_eq!(
            EasingFunction::from_timing_token("cubic-bezier(1.5, 0, 0.5, 1)"),
            EasingFunction::Ease
        );
        assert_eq!(EasingFunction::from_timing_token("steps(0)"), EasingFunction::Ease);
        assert_eq!(
            EasingFunction::from_timing_token("steps(1, jump-none)"),
            EasingFunction::Ease
        );
    }

    #[test]
    fn test_split_terms_respects_parentheses() {
        assert_eq!(
            split_terms("cubic-bezier(0.1, 0.2, 0.3, 0.4)  infinite"),
            ["cubic-bezier(0.1, 0.2, 0.3, 0.4)", "infinite"]
        );
    }
}
