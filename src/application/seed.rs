//! Initial dataset
//!
//! A fresh store starts with no companies, members or referrals and the
//! cooperative's five funds, all at zero balance.

use crate::domain::entities::NewArea;

pub fn default_areas() -> Vec<NewArea> {
    vec![
        NewArea::new("Gestão", "Gestão da cooperativa"),
        NewArea::new("Educação Financeira", "Educação financeira para os membros"),
        NewArea::new("Empréstimos", "Empréstimos para os membros"),
        NewArea::new("Causas Sociais", "Causas sociais da cooperativa"),
        NewArea::new("Investimentos", "Investimentos da cooperativa"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_valid_areas() {
        let areas = default_areas();
        assert_eq!(areas.len(), 5);
        assert_eq!(areas[0].name, "Gestão");
        assert!(areas.iter().all(|a| a.validate().is_ok()));
    }
}
