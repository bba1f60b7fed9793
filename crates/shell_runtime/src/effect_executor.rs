//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{components::dom, reducer::RuntimeEffect, runtime_context::ShellRuntimeContext};

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub(crate) fn install(runtime: ShellRuntimeContext) {
    // Clear the current queue before processing so nested dispatches enqueue a
    // fresh batch instead of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            match effect {
                RuntimeEffect::PlayOpenTransition(kind) => {
                    dom::replay_open_transition(kind.token());
                }
            }
        }
    });
}
