use super::Rejection;
use crate::jvm::{Component, Container, Descriptor};

/// Check whether `frame` could directly hold a component with the given descriptor
pub fn check<C: Container>(frame: &C, descriptor: &Descriptor) -> Result<(), Rejection> {
    let has_slot = frame.has_slot(descriptor.collection);
    let in_scope = descriptor.accepts(frame.scope());
    match (has_slot, in_scope) {
        (true, true) => Ok(()),
        (false, true) => Err(Rejection::MissingSlot),
        (true, false) => Err(Rejection::ScopeMismatch),
        (false, false) => Err(Rejection::MissingSlotAndScopeMismatch),
    }
}

/// Try to attach a component directly to a frame
///
/// This succeeds if the frame has the slot the component wants _and_ the frame's scope is one of
/// the component's parent scopes. On success, the component is appended to the end of the slot
/// and the residual is `None`. Otherwise, the frame comes back untouched along with the
/// component.
pub fn try_attach<C: Container>(mut frame: C, component: Component) -> (C, Option<Component>) {
    let descriptor = *component.descriptor();
    if let Err(reason) = check(&frame, &descriptor) {
        log::trace!(
            "{} rejected {} ({})",
            frame.scope(),
            descriptor.scope,
            reason
        );
        return (frame, Some(component));
    }

    let scope = frame.scope();
    match frame.slot_mut(descriptor.collection) {
        Some(slot) => {
            slot.push(component);
            log::trace!(
                "Attached {} to `{}` of {}",
                descriptor.scope,
                descriptor.collection,
                scope
            );
            (frame, None)
        }
        None => (frame, Some(component)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::jvm::*;

    #[test]
    fn attach_appends_in_order() {
        let code = attr::code(1, 0).into_frame();
        let (code, residual) = try_attach(code, op::iconst_1());
        assert_eq!(residual, None);
        let (code, residual) = try_attach(code, op::ireturn());
        assert_eq!(residual, None);

        let ops: Vec<&str> = code
            .slot(Collection::Code)
            .unwrap()
            .iter()
            .filter_map(Component::as_op)
            .map(Op::mnemonic)
            .collect();
        assert_eq!(ops, vec!["iconst_1", "ireturn"]);
    }

    #[test]
    fn scope_mismatch_leaves_frame_untouched() {
        let code = attr::code(1, 0).into_frame();
        let before = code.clone();
        let answer = constant("answer", 42, vec![]);

        assert_eq!(
            check(&code, answer.descriptor()),
            Err(Rejection::MissingSlotAndScopeMismatch)
        );
        let (code, residual) = try_attach(code, answer.clone());
        assert_eq!(code, before);
        assert_eq!(residual, Some(answer));
    }

    #[test]
    fn missing_slot_is_distinguished() {
        // An entry which claims the `Code` attribute but wants a slot the attribute lacks
        static PARENTS: &[Scope] = &[Scope::CODE];
        let odd = Component::new(
            Collection::Parameters,
            PARENTS,
            entry::method_parameter("x", 0).into_frame(),
        );
        let code = attr::code(1, 0).into_frame();
        assert_eq!(check(&code, odd.descriptor()), Err(Rejection::MissingSlot));

        let (_, residual) = try_attach(code, odd.clone());
        assert_eq!(residual, Some(odd));
    }

    #[test]
    fn right_slot_in_wrong_scope() {
        // The method has an `attributes` slot, but this attribute only goes on classes
        let method = method("run", None, vec![], MethodAccessFlags::PUBLIC).into_frame();
        let class_only = {
            static PARENTS: &[Scope] = &[Scope::Class];
            Component::new(Collection::Attributes, PARENTS, attr::deprecated().into_frame())
        };
        assert_eq!(
            check(&method, class_only.descriptor()),
            Err(Rejection::ScopeMismatch)
        );
    }
}
