use super::DecisionProvider;
use crate::Chips;
use crate::game::ActionKind;
use dialoguer::Input;
use dialoguer::Select;

/// Interactive seat prompting on the terminal.
#[derive(Debug, Default)]
pub struct Human;

impl DecisionProvider for Human {
    fn choose_action(&mut self, legal: &[ActionKind]) -> ActionKind {
        let labels = legal.iter().map(ActionKind::label).collect::<Vec<_>>();
        let choice = Select::new()
            .with_prompt("Your action")
            .report(false)
            .items(&labels)
            .default(0)
            .interact()
            .unwrap();
        legal[choice]
    }

    fn choose_amount(&mut self, min: Chips, max: Chips) -> Chips {
        Input::new()
            .with_prompt(format!("Amount [{}-{}]", min, max))
            .validate_with(|i: &String| -> Result<(), String> {
                let input = i
                    .parse::<Chips>()
                    .map_err(|_| String::from("Enter a positive integer"))?;
                if input < min {
                    return Err(format!("Minimum is {}", min));
                }
                if input > max {
                    return Err(format!("Maximum is {}", max));
                }
                Ok(())
            })
            .report(false)
            .interact()
            .unwrap()
            .parse::<Chips>()
            .unwrap()
    }
}
