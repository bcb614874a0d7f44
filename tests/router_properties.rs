use kids_dashboard::model::{HomeworkItem, HomeworkStatus, Route, Video};
use kids_dashboard::router::DashboardRouter;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    StartVideo,
    StartHomework { with_video: bool },
    CompleteTransition,
    CompleteMissionIntro,
    CompleteVideo(u32),
    NavigateTo(Route),
    GoBack,
    GoHome,
    QuitVideo,
    ShowBadges,
    ShowHelp,
    ClearHistory,
}

fn video() -> Video {
    Video {
        id: "v".into(),
        title: "Stretch".into(),
        url: "/v.mp4".into(),
        thumbnail: String::new(),
        duration_secs: 60,
        questions: Vec::new(),
        completion_reward: None,
    }
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::StartVideo),
        any::<bool>().prop_map(|with_video| Op::StartHomework { with_video }),
        Just(Op::CompleteTransition),
        Just(Op::CompleteMissionIntro),
        (0u32..200).prop_map(Op::CompleteVideo),
        proptest::sample::select(Route::ALL.to_vec()).prop_map(Op::NavigateTo),
        Just(Op::GoBack),
        Just(Op::GoHome),
        Just(Op::QuitVideo),
        Just(Op::ShowBadges),
        Just(Op::ShowHelp),
        Just(Op::ClearHistory),
    ]
}

fn apply(router: &mut DashboardRouter, op: &Op) -> bool {
    let result = match op {
        Op::StartVideo => {
            router.start_video(video());
            Ok(())
        }
        Op::StartHomework { with_video } => router.start_homework(HomeworkItem {
            id: "h".into(),
            title: "Mission".into(),
            icon: String::new(),
            status: HomeworkStatus::NotStarted,
            assigned_by: String::new(),
            video: with_video.then(video),
        }),
        Op::CompleteTransition => router.complete_transition(),
        Op::CompleteMissionIntro => router.complete_mission_intro(),
        Op::CompleteVideo(score) => router.complete_video(*score),
        Op::NavigateTo(route) => router.navigate_to(*route),
        Op::GoBack => {
            router.go_back();
            Ok(())
        }
        Op::GoHome => {
            router.go_home();
            Ok(())
        }
        Op::QuitVideo => {
            router.quit_video();
            Ok(())
        }
        Op::ShowBadges => {
            router.show_badges();
            Ok(())
        }
        Op::ShowHelp => {
            router.show_help();
            Ok(())
        }
        Op::ClearHistory => {
            router.clear_history();
            Ok(())
        }
    };
    result.is_ok()
}

proptest! {
    #[test]
    fn history_tracks_current_and_previous_route(ops in prop::collection::vec(op(), 0..40)) {
        let mut router = DashboardRouter::new();
        for op in &ops {
            let before = router.route_history().len();
            let route_before = router.current_route();
            let ok = apply(&mut router, op);

            let history = router.route_history();
            prop_assert_eq!(history.last().copied(), Some(router.current_route()));
            prop_assert_eq!(
                router.previous_route(),
                history.len().checked_sub(2).map(|i| history[i])
            );
            if !ok {
                prop_assert_eq!(history.len(), before);
                prop_assert_eq!(router.current_route(), route_before);
            }
            if router.current_route().needs_content() {
                prop_assert!(router.selected_video().is_some());
            }
            prop_assert!(router.completion_score().value() <= 100);
        }
    }

    #[test]
    fn go_home_always_clears_selection(ops in prop::collection::vec(op(), 0..40)) {
        let mut router = DashboardRouter::new();
        for op in &ops {
            apply(&mut router, op);
        }
        router.go_home();
        prop_assert_eq!(router.current_route(), Route::Dashboard);
        prop_assert!(router.selected_video().is_none());
        prop_assert!(router.selected_homework().is_none());
        prop_assert_eq!(router.completion_score().value(), 0);
    }
}
