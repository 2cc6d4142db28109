//! Several threads driving one world through the lock

use rigidsim_core::tests::test_helpers::{add_square, world_with_gravity};
use rigidsim_core::{SharedWorld, SimError};
use std::thread;

#[test]
fn test_frames_from_many_threads_are_serialized() {
    let mut world = world_with_gravity(9.81);
    add_square(&mut world, 1, 1.0, (100.0, 100.0), (0.0, 0.0), 10.0);
    add_square(&mut world, 2, 1.0, (300.0, 100.0), (0.0, 0.0), 10.0);
    let shared = SharedWorld::new(world);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    let snapshots = shared.frame(0.016).expect("frame runs");
                    assert_eq!(snapshots.len(), 2);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker thread");
    }

    assert_eq!(shared.with(|w| w.frames()).unwrap(), 200);
    let s = shared.get_object_state(1).unwrap().expect("body 1 exists");
    assert!(s.pos_y > 100.0);

    let world = shared.into_inner().expect("last handle");
    assert_eq!(world.len(), 2);
}

#[test]
fn test_invalid_frame_is_reported() {
    let shared = SharedWorld::new(world_with_gravity(9.81));
    assert_eq!(shared.frame(-1.0), Err(SimError::InvalidTimeStep(-1.0)));
    assert!(shared.get_object_state(1).unwrap().is_none());
}
