//! Unit tests for pan conversion, level validation and session selection.

#![allow(clippy::panic, clippy::unwrap_used)]

use crate::services::audio::{
    ChannelLevels, PanPosition, SelectionCriteria, SelectionError, SessionInfo, SessionProcess,
    VolumeError, VolumeLevel, pan_to_channel_levels, select,
    testing::FakeSession,
};

fn levels(left: f32, right: f32) -> ChannelLevels {
    ChannelLevels { left, right }
}

fn names(selected: &[crate::services::audio::SelectedSession<'_, FakeSession>]) -> Vec<String> {
    selected.iter().map(|s| s.session.name().to_string()).collect()
}

fn snapshot() -> Vec<FakeSession> {
    vec![
        FakeSession::new("Firefox", "firefox.exe", 100, 2),
        FakeSession::without_process("System Sounds", 2),
        FakeSession::new("Spotify", "Spotify.exe", 200, 2),
        FakeSession::new("Firefox Nightly", "FIREFOX.EXE", 300, 1),
    ]
}

mod pan {
    use super::*;

    #[test]
    fn boundary_values() {
        assert_eq!(pan_to_channel_levels(1.0), levels(0.0, 1.0));
        assert_eq!(pan_to_channel_levels(0.5), levels(0.5, 1.0));
        assert_eq!(pan_to_channel_levels(0.2), levels(0.8, 1.0));
        assert_eq!(pan_to_channel_levels(0.0), levels(1.0, 1.0));
        assert_eq!(pan_to_channel_levels(-0.5), levels(1.0, 0.5));
        assert_eq!(pan_to_channel_levels(-1.0), levels(1.0, 0.0));
    }

    #[test]
    fn one_channel_always_full() {
        for step in -100..=100 {
            let pan = step as f32 / 100.0;
            let ChannelLevels { left, right } = pan_to_channel_levels(pan);

            assert_eq!(left.max(right), 1.0, "pan {pan}");
            assert_eq!(left.min(right), 1.0 - pan.abs(), "pan {pan}");
        }
    }

    #[test]
    fn center_is_not_attenuated() {
        assert_eq!(PanPosition::CENTER.channel_levels(), levels(1.0, 1.0));
    }

    #[test]
    fn position_rejects_out_of_range() {
        assert_eq!(
            PanPosition::new(1.5),
            Err(VolumeError::InvalidPan { pan: 1.5 })
        );
        assert!(PanPosition::new(-1.01).is_err());
        assert!(PanPosition::new(f32::NAN).is_err());
        assert_eq!(PanPosition::new(-1.0), Ok(PanPosition::LEFT));
        assert_eq!(PanPosition::new(1.0), Ok(PanPosition::RIGHT));
    }

    #[test]
    fn position_display_names_known_positions() {
        assert_eq!(PanPosition::LEFT.to_string(), "left (-1.0)");
        assert_eq!(PanPosition::CENTER.to_string(), "center (0.0)");
        assert_eq!(PanPosition::RIGHT.to_string(), "right (1.0)");
        assert_eq!(PanPosition::new(0.5).unwrap().to_string(), "0.5");
        assert_eq!(PanPosition::new(-0.25).unwrap().to_string(), "-0.25");
    }
}

mod volume {
    use super::*;

    #[test]
    fn accepts_inclusive_range() {
        assert_eq!(VolumeLevel::new(0.0), Ok(VolumeLevel::MIN));
        assert_eq!(VolumeLevel::new(1.0), Ok(VolumeLevel::MAX));
        assert_eq!(VolumeLevel::new(0.35).map(VolumeLevel::value), Ok(0.35));
    }

    #[test]
    fn rejects_outside_range() {
        assert_eq!(
            VolumeLevel::new(1.2),
            Err(VolumeError::InvalidVolume { volume: 1.2 })
        );
        assert!(VolumeLevel::new(-0.1).is_err());
        assert!(VolumeLevel::new(f32::NAN).is_err());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            VolumeError::InvalidVolume { volume: 2.0 }.to_string(),
            "Volume value not in the range 0.0 to 1.0"
        );
        assert_eq!(
            VolumeError::InvalidPan { pan: 2.0 }.to_string(),
            "Pan value not in the range -1.0 to 1.0"
        );
    }
}

mod selection {
    use super::*;

    #[test]
    fn no_criteria_returns_everything_in_order() {
        let sessions = snapshot();

        let selected = select(&sessions, &SelectionCriteria::default()).unwrap();

        assert_eq!(
            names(&selected),
            ["Firefox", "System Sounds", "Spotify", "Firefox Nightly"]
        );
        let indices: Vec<usize> = selected.iter().map(|s| s.display_index).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
    }

    #[test]
    fn display_name_substring_is_case_sensitive() {
        let sessions = snapshot();
        let criteria = SelectionCriteria {
            display_name_contains: Some("Firefox".to_string()),
            ..Default::default()
        };

        let selected = select(&sessions, &criteria).unwrap();
        assert_eq!(names(&selected), ["Firefox", "Firefox Nightly"]);

        let criteria = SelectionCriteria {
            display_name_contains: Some("firefox".to_string()),
            ..Default::default()
        };
        assert!(select(&sessions, &criteria).unwrap().is_empty());
    }

    #[test]
    fn process_name_is_case_insensitive() {
        let sessions = snapshot();
        let criteria = SelectionCriteria {
            process_name: Some("Firefox.Exe".to_string()),
            ..Default::default()
        };

        let selected = select(&sessions, &criteria).unwrap();

        assert_eq!(names(&selected), ["Firefox", "Firefox Nightly"]);
    }

    #[test]
    fn process_name_excludes_sessions_without_process() {
        let sessions = snapshot();
        let criteria = SelectionCriteria {
            process_name: Some("spotify.exe".to_string()),
            ..Default::default()
        };

        let selected = select(&sessions, &criteria).unwrap();

        assert_eq!(names(&selected), ["Spotify"]);
    }

    #[test]
    fn empty_process_name_matches_sessions_without_process() {
        let sessions = snapshot();
        let criteria = SelectionCriteria {
            process_name: Some(String::new()),
            ..Default::default()
        };

        let selected = select(&sessions, &criteria).unwrap();

        assert_eq!(names(&selected), ["System Sounds"]);
    }

    #[test]
    fn unnamed_process_is_treated_as_empty_name() {
        let sessions = vec![FakeSession::with_info(
            SessionInfo::new(
                "Protected",
                Some(SessionProcess {
                    id: 42,
                    name: None,
                }),
            ),
            2,
        )];

        let by_name = SelectionCriteria {
            process_name: Some("protected.exe".to_string()),
            ..Default::default()
        };
        assert!(select(&sessions, &by_name).unwrap().is_empty());

        let by_pid = SelectionCriteria {
            process_id: Some(42),
            ..Default::default()
        };
        assert_eq!(select(&sessions, &by_pid).unwrap().len(), 1);
    }

    #[test]
    fn process_id_never_matches_sessions_without_process() {
        let sessions = snapshot();
        let criteria = SelectionCriteria {
            process_id: Some(200),
            ..Default::default()
        };

        let selected = select(&sessions, &criteria).unwrap();
        assert_eq!(names(&selected), ["Spotify"]);

        let criteria = SelectionCriteria {
            process_id: Some(0),
            ..Default::default()
        };
        assert!(select(&sessions, &criteria).unwrap().is_empty());
    }

    #[test]
    fn all_predicates_must_hold() {
        let sessions = snapshot();
        let criteria = SelectionCriteria {
            display_name_contains: Some("Firefox".to_string()),
            process_name: Some("firefox.exe".to_string()),
            process_id: Some(300),
            ..Default::default()
        };

        let selected = select(&sessions, &criteria).unwrap();

        assert_eq!(names(&selected), ["Firefox Nightly"]);
    }

    #[test]
    fn exactly_one_fails_on_no_matches() {
        let sessions = snapshot();
        let criteria = SelectionCriteria {
            display_name_contains: Some("Discord".to_string()),
            require_exactly_one: true,
            ..Default::default()
        };

        let err = select(&sessions, &criteria).unwrap_err();

        assert_eq!(err, SelectionError::NoMatches);
        assert_eq!(err.to_string(), "no matching sessions");
    }

    #[test]
    fn exactly_one_fails_on_two_matches() {
        let sessions = snapshot();
        let criteria = SelectionCriteria {
            display_name_contains: Some("Firefox".to_string()),
            require_exactly_one: true,
            ..Default::default()
        };

        let err = select(&sessions, &criteria).unwrap_err();

        assert_eq!(err, SelectionError::MultipleMatches { count: 2 });
    }

    #[test]
    fn exactly_one_succeeds_on_single_match() {
        let sessions = snapshot();
        let criteria = SelectionCriteria {
            display_name_contains: Some("Spotify".to_string()),
            require_exactly_one: true,
            ..Default::default()
        };

        let selected = select(&sessions, &criteria).unwrap();

        assert_eq!(names(&selected), ["Spotify"]);
    }

    #[test]
    fn index_collapses_filtered_set() {
        let sessions = snapshot();
        let criteria = SelectionCriteria {
            process_name: Some("firefox.exe".to_string()),
            only_index: Some(1),
            ..Default::default()
        };

        let selected = select(&sessions, &criteria).unwrap();

        assert_eq!(names(&selected), ["Firefox Nightly"]);
        assert_eq!(selected[0].display_index, 1);
    }

    #[test]
    fn index_zero_of_three_keeps_first() {
        let sessions = snapshot();
        let criteria = SelectionCriteria {
            display_name_contains: Some("i".to_string()),
            only_index: Some(0),
            ..Default::default()
        };

        let selected = select(&sessions, &criteria).unwrap();

        assert_eq!(names(&selected), ["Firefox"]);
        assert_eq!(selected[0].display_index, 0);
    }

    #[test]
    fn index_out_of_range_fails() {
        let sessions = snapshot();
        let criteria = SelectionCriteria {
            display_name_contains: Some("i".to_string()),
            only_index: Some(5),
            ..Default::default()
        };

        let err = select(&sessions, &criteria).unwrap_err();

        assert_eq!(err, SelectionError::IndexOutOfRange { index: 5, count: 3 });
        assert_eq!(err.to_string(), "no matching session at index 5");
    }

    #[test]
    fn exactly_one_is_checked_before_index() {
        let sessions = snapshot();
        let criteria = SelectionCriteria {
            process_name: Some("firefox.exe".to_string()),
            only_index: Some(0),
            require_exactly_one: true,
            ..Default::default()
        };

        let err = select(&sessions, &criteria).unwrap_err();

        assert_eq!(err, SelectionError::MultipleMatches { count: 2 });
    }

    #[test]
    fn selection_does_not_touch_sessions() {
        let sessions = snapshot();
        let criteria = SelectionCriteria {
            only_index: Some(2),
            ..Default::default()
        };

        select(&sessions, &criteria).unwrap();

        assert!(sessions.iter().all(|s| s.calls().is_empty()));
    }
}
