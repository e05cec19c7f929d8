use tactics_core::{
    AbilityRegistry, CardinalDirection, Entity, EntityId, EventLog, ExecuteError, GameConfig,
    GridService, Guard, MapDimensions, Obstacle, Party, PartyAction, PartyMember,
    PresentationEvent, Position, RemovalVariant, Roster, RosterChange, SpriteMapping, TerrainKind,
    TileGrid, TurnEngine,
};

const PARTY: EntityId = EntityId(1);
const GUARD: EntityId = EntityId(7);

struct Level {
    grid: TileGrid,
    log: EventLog,
    abilities: AbilityRegistry,
    config: GameConfig,
}

impl Level {
    fn new(members: Vec<PartyMember>, party_at: Position, guard_at: Position) -> Self {
        let mut grid = TileGrid::filled(MapDimensions::new(6, 6), TerrainKind::Floor);
        let roster = Roster::initialize(members, SpriteMapping::conventional()).unwrap();
        grid.spawn(Box::new(Party::new(PARTY, party_at, roster)))
            .unwrap();
        grid.spawn(Box::new(Guard::new(GUARD, guard_at, vec![Position::new(0, guard_at.y)])))
            .unwrap();

        Self {
            grid,
            log: EventLog::new(),
            abilities: AbilityRegistry::standard(),
            config: GameConfig::default(),
        }
    }

    fn engine(&mut self) -> TurnEngine<'_> {
        TurnEngine::new(
            &mut self.grid,
            &mut self.log,
            &self.abilities,
            &self.config,
            PARTY,
        )
        .unwrap()
    }

    fn party(&self) -> &Party {
        self.grid.entity(PARTY).and_then(|e| e.as_party()).unwrap()
    }
}

#[test]
fn guard_walks_toward_its_waypoint() {
    let mut level = Level::new(
        vec![PartyMember::Warlock],
        Position::new(2, 5),
        Position::new(4, 2),
    );

    let reports = level.engine().step_guards().unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].guard, GUARD);
    assert_eq!(reports[0].step.map(|step| step.to), Some(Position::new(3, 2)));
    assert_eq!(reports[0].caught, None);
    assert_eq!(level.log.motions_of(GUARD).count(), 1);
}

#[test]
fn guard_entering_the_party_tile_catches_the_active_member() {
    let mut level = Level::new(
        vec![PartyMember::Warlock, PartyMember::Wizard],
        Position::new(3, 2),
        Position::new(4, 2),
    );

    let reports = level.engine().step_guards().unwrap();

    assert_eq!(
        reports[0].caught,
        Some(RosterChange::MemberLost {
            member: PartyMember::Warlock,
            next_active: PartyMember::Wizard,
        })
    );
    assert_eq!(level.party().roster().members(), &[PartyMember::Wizard]);
    assert!(!level.party().is_removed());

    let tail: Vec<_> = level.log.events().iter().skip(1).cloned().collect();
    assert!(matches!(
        tail.as_slice(),
        [
            PresentationEvent::MemberCaught {
                member: PartyMember::Warlock,
                guard: GUARD,
                ..
            },
            PresentationEvent::ActiveMemberChanged {
                member: PartyMember::Wizard,
                ..
            },
        ]
    ));
}

#[test]
fn catching_the_last_member_defeats_and_removes_the_party() {
    let mut level = Level::new(
        vec![PartyMember::Sailor],
        Position::new(3, 2),
        Position::new(4, 2),
    );

    {
        let mut engine = level.engine();
        let reports = engine.step_guards().unwrap();
        assert_eq!(
            reports[0].caught,
            Some(RosterChange::Defeated {
                last: PartyMember::Sailor
            })
        );

        assert!(!engine.can_move(CardinalDirection::North));
        assert_eq!(
            engine.execute(PartyAction::Move(CardinalDirection::North)),
            Err(ExecuteError::PartyDefeated(PARTY))
        );
        assert_eq!(engine.active_member().unwrap(), PartyMember::Sailor);
    }

    assert!(level.party().is_defeated());
    assert!(level.party().is_removed());
    assert_eq!(
        level.log.removals().collect::<Vec<_>>(),
        vec![(PARTY, Some(GUARD), RemovalVariant::Caught)]
    );
    assert!(level.grid.entities_at(Position::new(3, 2)).iter().all(|e| e.id() == GUARD));
}

#[test]
fn blocked_guard_holds_its_ground() {
    let mut level = Level::new(
        vec![PartyMember::Warlock],
        Position::new(5, 5),
        Position::new(4, 2),
    );
    level
        .grid
        .spawn(Box::new(Obstacle::new(EntityId(3), Position::new(3, 2))))
        .unwrap();

    let reports = level.engine().step_guards().unwrap();

    assert_eq!(reports[0].step, None);
    assert_eq!(
        level.grid.entity(GUARD).unwrap().position(),
        Position::new(4, 2)
    );
    assert!(level.log.events().is_empty());
}

#[test]
fn guards_advance_with_the_turn_loop() {
    let mut level = Level::new(
        vec![PartyMember::Warlock, PartyMember::Pickpocket],
        Position::new(0, 0),
        Position::new(5, 4),
    );

    let mut engine = level.engine();
    engine
        .execute(PartyAction::Move(CardinalDirection::North))
        .unwrap();
    engine.step_guards().unwrap();
    engine
        .execute(PartyAction::Move(CardinalDirection::East))
        .unwrap();
    engine.step_guards().unwrap();

    assert_eq!(engine.active_member().unwrap(), PartyMember::Warlock);
    assert_eq!(
        engine.grid().entity(GUARD).unwrap().position(),
        Position::new(3, 4)
    );
}
