use serde::{Deserialize, Serialize};

/// Diagnostics returned with every step. Serializes to the flat key layout
/// agents expect (`action.name`, `action.moved_player`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepInfo {
    #[serde(rename = "action.name")]
    pub action_name: String,
    #[serde(rename = "action.moved_player")]
    pub moved_player: bool,
    #[serde(rename = "action.moved_box")]
    pub moved_box: bool,
    /// Only present once the episode is done.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub maxsteps_used: Option<bool>,
    /// Only present once the episode is done.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub all_boxes_on_target: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult<O> {
    pub observation: O,
    pub reward: f64,
    pub done: bool,
    pub info: StepInfo,
}

impl<O> From<StepResult<O>> for (O, f64, bool, StepInfo) {
    fn from(result: StepResult<O>) -> Self {
        (result.observation, result.reward, result.done, result.info)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn running_episode_omits_terminal_keys() {
        let info = StepInfo {
            action_name: "push up".to_string(),
            moved_player: true,
            moved_box: false,
            maxsteps_used: None,
            all_boxes_on_target: None,
        };
        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({
                "action.name": "push up",
                "action.moved_player": true,
                "action.moved_box": false,
            })
        );
    }

    #[test]
    fn finished_episode_carries_terminal_keys() {
        let info = StepInfo {
            action_name: "pull left".to_string(),
            moved_player: true,
            moved_box: true,
            maxsteps_used: Some(false),
            all_boxes_on_target: Some(true),
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["maxsteps_used"], json!(false));
        assert_eq!(value["all_boxes_on_target"], json!(true));
    }
}
