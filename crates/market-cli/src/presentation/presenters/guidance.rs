use crate::presentation::view_models::{CommandResultViewModel, GuidanceViewModel, UsageExample};

pub fn present_guidance() -> CommandResultViewModel<GuidanceViewModel> {
    let examples = [
        ("View all the apps in the marketplace", "market search"),
        ("Search for specific keywords or terms", "market search \"games social\""),
        ("Search for all the apps from a particular user", "market search \"snakamoto\""),
    ]
    .into_iter()
    .map(|(description, command)| UsageExample {
        description: description.to_string(),
        command: command.to_string(),
    })
    .collect();

    CommandResultViewModel::new(GuidanceViewModel { examples })
}
