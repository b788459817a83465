use super::*;

fn sink() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&seen);
    (seen, move |m: &str| s.borrow_mut().push(m.to_owned()))
}

#[test]
fn publish_reaches_listeners_in_subscription_order() {
    let bus = MessageBus::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let (a, b) = (Rc::clone(&order), Rc::clone(&order));
    let _s1 = bus.subscribe(move |m| a.borrow_mut().push(format!("1:{m}")));
    let _s2 = bus.subscribe(move |m| b.borrow_mut().push(format!("2:{m}")));

    bus.publish(MSG_CHART_SAVED);
    assert_eq!(
        *order.borrow(),
        vec![
            "1:Chart saved to gallery!".to_owned(),
            "2:Chart saved to gallery!".to_owned()
        ]
    );
}

#[test]
fn unsubscribe_and_drop_both_remove_listener() {
    let bus = MessageBus::new();
    let (seen, listener) = sink();
    let sub = bus.subscribe(listener);
    bus.publish("one");
    sub.unsubscribe();
    bus.publish("two");
    assert_eq!(*seen.borrow(), vec!["one".to_owned()]);

    let (seen, listener) = sink();
    {
        let _sub = bus.subscribe(listener);
        bus.publish("three");
    }
    bus.publish("four");
    assert_eq!(*seen.borrow(), vec!["three".to_owned()]);
    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn publish_without_listeners_is_a_no_op() {
    let bus = MessageBus::new();
    bus.publish(MSG_CHART_DELETED);
    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn subscription_outliving_bus_is_harmless() {
    let (_, listener) = sink();
    let sub = {
        let bus = MessageBus::new();
        bus.subscribe(listener)
    };
    drop(sub);
}

#[test]
fn listener_may_drop_its_own_subscription() {
    let bus = MessageBus::new();
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let count = Rc::new(RefCell::new(0));
    let (s, c) = (Rc::clone(&slot), Rc::clone(&count));
    let sub = bus.subscribe(move |_| {
        *c.borrow_mut() += 1;
        s.borrow_mut().take();
    });
    *slot.borrow_mut() = Some(sub);

    bus.publish("once");
    bus.publish("twice");
    assert_eq!(*count.borrow(), 1);
    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn cloned_handles_share_listeners() {
    let bus = MessageBus::new();
    let other = bus.clone();
    let (seen, listener) = sink();
    let _sub = bus.subscribe(listener);
    other.publish("shared");
    assert_eq!(*seen.borrow(), vec!["shared".to_owned()]);
}
