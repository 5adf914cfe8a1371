/// Line-oriented terminal input, abstracted so the interactive flow can
/// be driven by a scripted fake in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Interactor {
    fn input(&self, prompt: &str) -> std::io::Result<String>;
}

pub fn interactive() -> impl Interactor {
    Interactive
}

struct Interactive;

impl Interactor for Interactive {
    fn input(&self, prompt: &str) -> std::io::Result<String> {
        dialoguer::Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
    }
}
