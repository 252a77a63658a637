//! Unit tests for dx-unit.

use dx_core::{Seq, UnitId, UnitRng};

use crate::{DispatchContext, Handler, PassThrough, Verdict};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn make_labels(labels: &[&str]) -> Vec<Box<str>> {
    labels.iter().map(|l| Box::from(*l)).collect()
}

// ── Verdict ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod verdict_tests {
    use super::*;

    #[test]
    fn terminality() {
        assert!(Verdict::Done("ok").is_terminal());
        assert!(Verdict::Goto { output: "ok", next: UnitId(1) }.is_terminal());
        assert!(!Verdict::<&str>::Pass.is_terminal());
    }

    #[test]
    fn transition_target() {
        let v = Verdict::Goto { output: 1u32, next: UnitId(4) };
        assert_eq!(v.transition(), Some(UnitId(4)));
        assert_eq!(Verdict::Done(1u32).transition(), None);
        assert_eq!(Verdict::<u32>::Pass.transition(), None);
    }
}

// ── DispatchContext ───────────────────────────────────────────────────────────

#[cfg(test)]
mod context_tests {
    use super::*;

    #[test]
    fn fields_accessible() {
        let labels = make_labels(&["off", "on"]);
        let ctx = DispatchContext::new(Seq(3), UnitId(1), &labels);
        assert_eq!(ctx.seq, Seq(3));
        assert_eq!(ctx.unit, UnitId(1));
        assert_eq!(ctx.unit_count(), 2);
    }

    #[test]
    fn label_of() {
        let labels = make_labels(&["off", "on"]);
        let ctx = DispatchContext::new(Seq(0), UnitId(0), &labels);
        assert_eq!(ctx.label_of(UnitId(1)), Some("on"));
        assert_eq!(ctx.label_of(UnitId(9)), None);
    }

    #[test]
    fn find_returns_first_registration() {
        let labels = make_labels(&["a", "b", "a"]);
        let ctx = DispatchContext::new(Seq(0), UnitId(0), &labels);
        assert_eq!(ctx.find("a"), Some(UnitId(0)));
        assert_eq!(ctx.find("b"), Some(UnitId(1)));
        assert_eq!(ctx.find("missing"), None);
    }
}

// ── PassThrough ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod passthrough_tests {
    use super::*;

    #[test]
    fn always_passes() {
        let labels = make_labels(&["noop"]);
        let ctx = DispatchContext::new(Seq(0), UnitId(0), &labels);
        let mut rng = UnitRng::new(0, UnitId(0));
        let v: Verdict<u32> = PassThrough.handle(&7u32, &ctx, &mut rng);
        assert_eq!(v, Verdict::Pass);
    }
}

// ── Custom Handler ────────────────────────────────────────────────────────────

#[cfg(test)]
mod custom_handler_tests {
    use super::*;

    /// A unit that answers every request with its own label.
    struct Echo;

    impl Handler<u32, String> for Echo {
        fn handle(
            &mut self,
            _req: &u32,
            ctx:  &DispatchContext<'_>,
            _rng: &mut UnitRng,
        ) -> Verdict<String> {
            Verdict::Done(ctx.label_of(ctx.unit).unwrap_or("?").to_string())
        }
    }

    #[test]
    fn custom_handler_sees_context() {
        let labels = make_labels(&["echo"]);
        let ctx = DispatchContext::new(Seq(0), UnitId(0), &labels);
        let mut rng = UnitRng::new(0, UnitId(0));
        assert_eq!(Echo.handle(&1, &ctx, &mut rng), Verdict::Done("echo".to_string()));
    }

    #[test]
    fn handler_is_object_safe_via_box() {
        // Verify Handler can be used as a trait object, as registries do.
        let mut unit: Box<dyn Handler<u32, String>> = Box::new(Echo);
        let labels = make_labels(&["echo"]);
        let ctx = DispatchContext::new(Seq(0), UnitId(0), &labels);
        let mut rng = UnitRng::new(0, UnitId(0));
        assert!(unit.handle(&1, &ctx, &mut rng).is_terminal());
    }

    #[test]
    fn enter_exit_hooks_default_to_noop() {
        let labels = make_labels(&["echo"]);
        let ctx = DispatchContext::new(Seq(0), UnitId(0), &labels);
        // Just exercising the default bodies.
        Echo.on_enter(&ctx);
        Echo.on_exit(&ctx);
    }
}
