pub mod badges;
pub mod completion;
pub mod dashboard;
pub mod help;
pub mod loading;
pub mod mission_intro;
pub mod video_player;
pub mod video_transition;
