// src/domain/filter.rs
use crate::domain::entry::{AiModel, Category, Entry};
use std::collections::HashSet;
use std::marker::PhantomData;

/*
   The filter engine is a pure transformation from (entry list, criteria)
   to the matching sublist. Each criterion is a Specification; active
   criteria are combined with AND. No mutation, no I/O, so the engine is
   independently testable and exactly reproducible for fixed inputs.
*/

/// A predicate that determines whether an entry matches a criterion
pub trait Specification<T> {
    fn is_satisfied_by(&self, entity: &T) -> bool;
}

impl<T> Specification<T> for Box<dyn Specification<T>> {
    fn is_satisfied_by(&self, entity: &T) -> bool {
        (**self).is_satisfied_by(entity)
    }
}

/// Combines two specifications with logical AND
pub struct AndSpecification<T, A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    spec_a: A,
    spec_b: B,
    _marker: PhantomData<T>,
}

impl<T, A, B> AndSpecification<T, A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    pub fn new(spec_a: A, spec_b: B) -> Self {
        Self {
            spec_a,
            spec_b,
            _marker: PhantomData,
        }
    }
}

impl<T, A, B> Specification<T> for AndSpecification<T, A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied_by(&self, entity: &T) -> bool {
        self.spec_a.is_satisfied_by(entity) && self.spec_b.is_satisfied_by(entity)
    }
}

/// Extension trait to make combining specifications more readable
pub trait SpecificationExt<T>: Specification<T> {
    fn and<S: Specification<T>>(self, other: S) -> AndSpecification<T, Self, S>
    where
        Self: Sized,
    {
        AndSpecification::new(self, other)
    }
}

impl<T, S> SpecificationExt<T> for S where S: Specification<T> {}

/// Case-insensitive substring match over prompt, link and tags.
/// An empty term matches everything.
pub struct TermSpecification {
    term: String,
}

impl TermSpecification {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }
}

impl Specification<Entry> for TermSpecification {
    fn is_satisfied_by(&self, entry: &Entry) -> bool {
        if self.term.is_empty() {
            return true;
        }
        entry.matches_term(&self.term)
    }
}

/// Entry category must be in the supplied set
pub struct CategorySpecification {
    categories: HashSet<Category>,
}

impl CategorySpecification {
    pub fn new(categories: HashSet<Category>) -> Self {
        Self { categories }
    }
}

impl Specification<Entry> for CategorySpecification {
    fn is_satisfied_by(&self, entry: &Entry) -> bool {
        self.categories.contains(&entry.category)
    }
}

/// Entry model must be in the supplied set
pub struct ModelSpecification {
    models: HashSet<AiModel>,
}

impl ModelSpecification {
    pub fn new(models: HashSet<AiModel>) -> Self {
        Self { models }
    }
}

impl Specification<Entry> for ModelSpecification {
    fn is_satisfied_by(&self, entry: &Entry) -> bool {
        self.models.contains(&entry.ai_model)
    }
}

/// The combination of search term, category set and model set used to
/// narrow a list of entries. Omitted criteria impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub term: Option<String>,
    pub categories: Option<HashSet<Category>>,
    pub models: Option<HashSet<AiModel>>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn with_categories(mut self, categories: HashSet<Category>) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn with_models(mut self, models: HashSet<AiModel>) -> Self {
        self.models = Some(models);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.term.as_deref().map_or(true, str::is_empty)
            && self.categories.as_ref().map_or(true, HashSet::is_empty)
            && self.models.as_ref().map_or(true, HashSet::is_empty)
    }

    /// Build the composed specification for the active criteria.
    /// Empty sets behave like omitted criteria.
    fn specification(&self) -> Option<Box<dyn Specification<Entry>>> {
        let mut spec: Option<Box<dyn Specification<Entry>>> = None;

        if let Some(term) = self.term.as_deref().filter(|t| !t.is_empty()) {
            spec = Some(Box::new(TermSpecification::new(term)));
        }

        if let Some(categories) = self.categories.clone().filter(|c| !c.is_empty()) {
            let cat_spec = CategorySpecification::new(categories);
            spec = Some(match spec {
                Some(prev) => Box::new(prev.and(cat_spec)),
                None => Box::new(cat_spec),
            });
        }

        if let Some(models) = self.models.clone().filter(|m| !m.is_empty()) {
            let model_spec = ModelSpecification::new(models);
            spec = Some(match spec {
                Some(prev) => Box::new(prev.and(model_spec)),
                None => Box::new(model_spec),
            });
        }

        spec
    }

    /// Apply the criteria, preserving the relative order of the input.
    pub fn apply(&self, entries: &[Entry]) -> Vec<Entry> {
        match self.specification() {
            None => entries.to_vec(),
            Some(spec) => entries
                .iter()
                .filter(|entry| spec.is_satisfied_by(*entry))
                .cloned()
                .collect(),
        }
    }
}
