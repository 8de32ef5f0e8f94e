pub const COLUMN_ENTITY: &str = "Empresa";
pub const COLUMN_INVESTMENT_TYPE: &str = "Tipo de Investimento";
pub const COLUMN_VALUE: &str = "Valor";

pub const REQUIRED_COLUMNS: [&str; 3] = [COLUMN_ENTITY, COLUMN_INVESTMENT_TYPE, COLUMN_VALUE];

/// One holding line of the uploaded spreadsheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub entity: String,
    pub category: String,
    pub value: f64,
}

impl Holding {
    #[allow(dead_code)]
    pub fn new(entity: impl Into<String>, category: impl Into<String>, value: f64) -> Self {
        Self {
            entity: entity.into(),
            category: category.into(),
            value,
        }
    }

    pub fn key(&self, field: GroupingField) -> &str {
        match field {
            GroupingField::InvestmentType => &self.category,
            GroupingField::Entity => &self.entity,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub holdings: Vec<Holding>,
}

impl Dataset {
    pub fn new(holdings: Vec<Holding>) -> Self {
        Self { holdings }
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Sum of every holding, negatives included.
    pub fn total(&self) -> f64 {
        self.holdings.iter().map(|h| h.value).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupingField {
    InvestmentType,
    Entity,
}

impl GroupingField {
    pub const ALL: [GroupingField; 2] = [GroupingField::InvestmentType, GroupingField::Entity];

    #[allow(dead_code)]
    pub fn column_name(self) -> &'static str {
        match self {
            GroupingField::InvestmentType => COLUMN_INVESTMENT_TYPE,
            GroupingField::Entity => COLUMN_ENTITY,
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            GroupingField::InvestmentType => "Produtos",
            GroupingField::Entity => "Carteiras",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub category: String,
    pub total: f64,
}

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub category: String,
    pub total: f64,
    pub color: &'static str,
}
