use crate::game::GBVar;

pub trait VariableService {
    fn register_variable(&mut self, var: GBVar);
    fn get_variables(&self) -> Vec<GBVar>;
}

#[derive(Debug, Default)]
pub struct DefaultVariableService {
    variables: Vec<GBVar>,
}

impl VariableService for DefaultVariableService {
    fn register_variable(&mut self, var: GBVar) {
        self.variables.push(var);
    }

    fn get_variables(&self) -> Vec<GBVar> {
        self.variables.clone()
    }
}

#[derive(Debug, Default)]
pub struct MockVariableService {
    variables: Vec<GBVar>,
    pub registered_variables: Vec<String>,
}

impl MockVariableService {
    pub fn reset(&mut self) {
        self.variables.clear();
        self.registered_variables.clear();
    }
}

impl VariableService for MockVariableService {
    fn register_variable(&mut self, var: GBVar) {
        self.registered_variables.push(var.name.clone());
        self.variables.push(var);
    }

    fn get_variables(&self) -> Vec<GBVar> {
        self.variables.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScalarType;

    #[test]
    fn registered_variables_round_trip() {
        let mut mock = MockVariableService::default();
        mock.register_variable(GBVar::scalar("hp", ScalarType::U8, 100));
        assert_eq!(mock.registered_variables, vec!["hp".to_string()]);
        assert_eq!(mock.get_variables().len(), 1);
        mock.reset();
        assert!(mock.get_variables().is_empty());
    }
}
