use tracing::{debug, info};

use crate::config::EnvConfig;
use crate::core::{
    action_lookup, box_target_distance, step, Action, Cell, EngineError, Room, ACTION_COUNT,
};
use crate::env::info::{StepInfo, StepResult};
use crate::env::render::{Render, RenderMode, SymbolRenderer};
use crate::env::source::RoomSource;

/// Push/pull Sokoban environment: one room, the step counter and the reward
/// bookkeeping around [`step`].
///
/// Stepping needs `&mut self`; an environment is driven by one caller at a
/// time and must be wrapped in a lock to be shared across threads.
pub struct PushPullEnv<R: Render = SymbolRenderer> {
    config: EnvConfig,
    room: Room,
    renderer: R,
    num_env_steps: u32,
    boxes_on_target: usize,
    reward_last: f64,
}

impl PushPullEnv<SymbolRenderer> {
    pub fn with_symbols(config: EnvConfig, room: Room) -> Result<Self, EngineError> {
        PushPullEnv::new(config, room, SymbolRenderer)
    }
}

impl<R: Render> PushPullEnv<R> {
    pub fn new(config: EnvConfig, room: Room, renderer: R) -> Result<Self, EngineError> {
        check_room_size(&config, &room)?;
        let boxes_on_target = room.count(Cell::BoxOnTarget);
        Ok(PushPullEnv {
            config,
            room,
            renderer,
            num_env_steps: 0,
            boxes_on_target,
            reward_last: 0.0,
        })
    }

    /// Starts a new episode on `room` and returns its first observation.
    pub fn reset(&mut self, room: Room, mode: RenderMode) -> Result<R::Output, EngineError> {
        check_room_size(&self.config, &room)?;
        self.boxes_on_target = room.count(Cell::BoxOnTarget);
        self.room = room;
        self.num_env_steps = 0;
        self.reward_last = 0.0;
        info!(
            dim_room = ?self.room.dim(),
            boxes_on_target = self.boxes_on_target,
            "episode reset"
        );
        Ok(self.render(mode))
    }

    pub fn reset_from<S: RoomSource + ?Sized>(
        &mut self,
        source: &mut S,
        mode: RenderMode,
    ) -> Result<R::Output, EngineError> {
        let room = source.next_room()?;
        self.reset(room, mode)
    }

    /// Steps with an external integer action code. Out-of-range codes are
    /// rejected before anything changes, including the step counter.
    pub fn step_code(
        &mut self,
        code: i64,
        mode: RenderMode,
    ) -> Result<StepResult<R::Output>, EngineError> {
        let action = Action::from_code(code)?;
        Ok(self.step(action, mode))
    }

    pub fn step(&mut self, action: Action, mode: RenderMode) -> StepResult<R::Output> {
        let prev_dist = self.distance();
        self.num_env_steps += 1;

        let transition = step(&mut self.room, action);

        self.calc_reward();

        let after_dist = self.distance();
        match (prev_dist, after_dist) {
            (Some(prev), Some(after)) if after < prev => {
                self.reward_last += self.config.rewards.getting_closer_reward;
            }
            (Some(prev), Some(after)) if after > prev => {
                self.reward_last += self.config.rewards.getting_farther_reward;
            }
            (Some(_), Some(_)) => {}
            _ => debug!(?prev_dist, ?after_dist, "distance unavailable, no shaping reward"),
        }

        let done = self.check_if_done();
        let observation = self.render(mode);

        let mut step_info = StepInfo {
            action_name: action.name().to_string(),
            moved_player: transition.moved_player,
            moved_box: transition.moved_box,
            maxsteps_used: None,
            all_boxes_on_target: None,
        };
        if done {
            let maxsteps_used = self.check_if_maxsteps();
            let all_boxes_on_target = self.check_if_all_boxes_on_target();
            step_info.maxsteps_used = Some(maxsteps_used);
            step_info.all_boxes_on_target = Some(all_boxes_on_target);
            info!(
                steps = self.num_env_steps,
                maxsteps_used, all_boxes_on_target, "episode done"
            );
        }

        debug!(
            step = self.num_env_steps,
            action = action.name(),
            moved_player = transition.moved_player,
            moved_box = transition.moved_box,
            reward = self.reward_last,
            done,
            "step"
        );

        StepResult {
            observation,
            reward: self.reward_last,
            done,
            info: step_info,
        }
    }

    fn calc_reward(&mut self) {
        let rewards = &self.config.rewards;
        self.reward_last = rewards.penalty_for_step;

        let current_boxes_on_target = self.room.count(Cell::BoxOnTarget);
        if current_boxes_on_target > self.boxes_on_target {
            self.reward_last += rewards.reward_box_on_target;
        } else if current_boxes_on_target < self.boxes_on_target {
            self.reward_last += rewards.penalty_box_off_target;
        }

        if self.check_if_all_boxes_on_target() {
            self.reward_last += rewards.reward_finished;
        }

        self.boxes_on_target = current_boxes_on_target;
    }

    pub fn check_if_done(&self) -> bool {
        self.check_if_all_boxes_on_target() || self.check_if_maxsteps()
    }

    /// No free target is left and the player is not standing on one.
    pub fn check_if_all_boxes_on_target(&self) -> bool {
        let player = self.room.player();
        let player_hiding_on_target = self.room.fixed_at(&player) == Some(Cell::Target);
        self.room.count(Cell::Target) == 0 && !player_hiding_on_target
    }

    pub fn check_if_maxsteps(&self) -> bool {
        self.num_env_steps >= self.config.max_steps
    }

    pub fn distance(&self) -> Option<u32> {
        box_target_distance(&self.room)
    }

    /// On-target flag per box. Boxes carry no identity in the grid, so the
    /// first `boxes_on_target` flags are set.
    pub fn box_flags(&self) -> Vec<bool> {
        (0..self.config.num_boxes)
            .map(|i| i < self.boxes_on_target)
            .collect()
    }

    pub fn render(&self, mode: RenderMode) -> R::Output {
        self.renderer.render(&self.room, mode)
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn num_env_steps(&self) -> u32 {
        self.num_env_steps
    }

    pub fn boxes_on_target(&self) -> usize {
        self.boxes_on_target
    }

    pub fn reward_last(&self) -> f64 {
        self.reward_last
    }

    pub fn action_lookup(&self) -> &'static [&'static str; ACTION_COUNT] {
        action_lookup()
    }

    pub fn action_meanings(&self) -> Vec<&'static str> {
        action_lookup().to_vec()
    }
}

fn check_room_size(config: &EnvConfig, room: &Room) -> Result<(), EngineError> {
    if room.dim() != config.dim_room {
        return Err(EngineError::RoomSizeMismatch {
            expected: config.dim_room,
            found: room.dim(),
        });
    }
    Ok(())
}
