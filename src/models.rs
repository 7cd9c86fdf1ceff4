use crate::env::StepInfo;

pub struct WatchRenderState {
    pub room_text: String,
    pub step: u32,
    pub reward: f64,
    pub total_reward: f64,
    pub done: bool,
    pub last_info: Option<StepInfo>,
}
