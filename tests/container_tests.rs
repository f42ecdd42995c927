use dualbuf::{Entity, EntityContainer};
use std::sync::atomic::{AtomicU32, Ordering};

#[derive(Debug, Default)]
struct Enemy {
    health: i32,
    deleted: bool,
    hits: AtomicU32,
}

impl Enemy {
    fn new(health: i32) -> Self {
        Self {
            health,
            ..Self::default()
        }
    }
}

impl Entity for Enemy {
    fn is_deleted(&self) -> bool {
        self.deleted
    }
}

#[test]
fn test_zero_capacity_rejected() {
    assert!(EntityContainer::<Enemy>::new(0).is_err());
}

#[test]
fn test_add_and_count() {
    let mut container = EntityContainer::new(2).unwrap();
    for health in 0..5 {
        container.add_entity(Enemy::new(health));
    }

    assert_eq!(container.count_entities(), 5);
    let healths: Vec<i32> = container.iter().map(|e| e.health).collect();
    assert_eq!(healths, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_iterate_removes_deleted_entities() {
    let mut container = EntityContainer::default();
    for health in [10, 0, 5, 0, 1] {
        container.add_entity(Enemy::new(health));
    }

    container.iterate(|enemy| {
        if enemy.health <= 0 {
            enemy.deleted = true;
        }
    });

    assert_eq!(container.count_entities(), 3);
    let healths: Vec<i32> = (&container).into_iter().map(|e| e.health).collect();
    assert_eq!(healths, vec![10, 5, 1]);
}

#[test]
fn test_iterate_keeps_everything_when_nothing_deleted() {
    let mut container = EntityContainer::new(4).unwrap();
    for health in 1..=100 {
        container.add_entity(Enemy::new(health));
    }

    container.iterate(|enemy| enemy.health -= 1);

    assert_eq!(container.count_entities(), 100);
    assert!(container.iter().map(|e| e.health).eq(0..100));
}

#[test]
fn test_immutable_iterate_visits_all() {
    let mut container = EntityContainer::new(4).unwrap();
    for health in 0..20_000 {
        container.add_entity(Enemy::new(health));
    }

    container.immutable_iterate(|enemy| {
        enemy.hits.fetch_add(1, Ordering::Relaxed);
    });

    assert!(container
        .iter()
        .all(|enemy| enemy.hits.load(Ordering::Relaxed) == 1));
}

#[test]
fn test_clear_container() {
    let mut container = EntityContainer::new(4).unwrap();
    container.add_entity(Enemy::new(1));
    container.add_entity(Enemy::new(2));

    container.clear_container();
    assert_eq!(container.count_entities(), 0);

    container.clear_container();
    assert_eq!(container.count_entities(), 0);
    assert_eq!(container.iter().next().map(|e| e.health), None);
}
