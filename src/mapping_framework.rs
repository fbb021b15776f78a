use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};
use tracing::{debug, instrument, warn};

use crate::config::{CyclePolicy, MapperConfig};
use crate::error::{ConfigurationError, MappingError};

// =============================================================================
// 1. THE ABSTRACTION (Destinations, Member Rules, Projections)
// =============================================================================

/// A type that projections produce.
///
/// `MEMBERS` lists every member a type map has to account for. Validation
/// compares it with the members a [`Projection`] declares.
pub trait Destination: 'static {
    const MEMBERS: &'static [&'static str];
}

/// Type name without its module path, e.g. `OrderSummary`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Identifies a type map by its source and destination types.
#[derive(Debug, Clone, Copy)]
pub struct TypePair {
    source: TypeId,
    destination: TypeId,
    source_name: &'static str,
    destination_name: &'static str,
}

impl TypePair {
    pub fn of<S: 'static, D: 'static>() -> Self {
        Self {
            source: TypeId::of::<S>(),
            destination: TypeId::of::<D>(),
            source_name: short_type_name::<S>(),
            destination_name: short_type_name::<D>(),
        }
    }

    pub fn source_name(&self) -> &'static str {
        self.source_name
    }

    pub fn destination_name(&self) -> &'static str {
        self.destination_name
    }
}

impl PartialEq for TypePair {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.destination == other.destination
    }
}

impl Eq for TypePair {}

impl Hash for TypePair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.destination.hash(state);
    }
}

impl Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source_name, self.destination_name)
    }
}

/// Where a destination member gets its value from.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceExpr {
    /// A member path on the source, e.g. `item_ordered.product_name`.
    Member(&'static str),
    /// A value computed from the source.
    Computed(&'static str),
    /// A nested value mapped through another registered type map.
    Nested { path: &'static str, map: TypePair },
    /// A collection mapped element by element through another type map.
    Each { path: &'static str, map: TypePair },
    /// Deliberately left unmapped.
    Ignore,
}

/// One destination member and its source expression.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberRule {
    pub destination: &'static str,
    pub source: SourceExpr,
}

impl MemberRule {
    pub fn map_from(destination: &'static str, path: &'static str) -> Self {
        Self { destination, source: SourceExpr::Member(path) }
    }

    pub fn computed(destination: &'static str, expr: &'static str) -> Self {
        Self { destination, source: SourceExpr::Computed(expr) }
    }

    pub fn nested<S: 'static, D: Destination>(destination: &'static str, path: &'static str) -> Self {
        Self {
            destination,
            source: SourceExpr::Nested { path, map: TypePair::of::<S, D>() },
        }
    }

    pub fn each<S: 'static, D: Destination>(destination: &'static str, path: &'static str) -> Self {
        Self {
            destination,
            source: SourceExpr::Each { path, map: TypePair::of::<S, D>() },
        }
    }

    pub fn ignore(destination: &'static str) -> Self {
        Self { destination, source: SourceExpr::Ignore }
    }

    fn nested_map(&self) -> Option<TypePair> {
        match &self.source {
            SourceExpr::Nested { map, .. } | SourceExpr::Each { map, .. } => Some(*map),
            _ => None,
        }
    }
}

/// Trait that every type map implements to be registered in a [`RuleSet`].
pub trait Projection: Send + Sync + 'static {
    type Source: 'static;
    type Destination: Destination;

    /// The source expression of each destination member.
    fn members(&self) -> Vec<MemberRule>;

    /// Build the destination. Nested values must go through `ctx`.
    fn project(
        &self,
        source: &Self::Source,
        ctx: &mut MappingContext<'_>,
    ) -> Result<Self::Destination, MappingError>;
}

// =============================================================================
// 2. THE RULE SET (Registration and Validation)
// =============================================================================

type BoxedProjection<S, D> = Box<dyn Projection<Source = S, Destination = D>>;

struct TypeMap {
    pair: TypePair,
    destination_members: &'static [&'static str],
    members: Vec<MemberRule>,
    // Holds a `BoxedProjection<S, D>` for this map's pair.
    projection: Box<dyn Any + Send + Sync>,
}

#[derive(Default)]
pub struct RuleSetBuilder {
    maps: Vec<TypeMap>,
    index: HashMap<TypePair, usize>,
}

impl RuleSetBuilder {
    /// Registers the type map for `P::Source -> P::Destination`.
    pub fn create_map<P: Projection>(&mut self, projection: P) -> Result<&mut Self, ConfigurationError> {
        let pair = TypePair::of::<P::Source, P::Destination>();
        if self.index.contains_key(&pair) {
            return Err(ConfigurationError::DuplicateTypeMap { pair: pair.to_string() });
        }

        let members = projection.members();
        debug!(%pair, members = members.len(), "Registering type map");

        let boxed: BoxedProjection<P::Source, P::Destination> = Box::new(projection);
        self.index.insert(pair, self.maps.len());
        self.maps.push(TypeMap {
            pair,
            destination_members: <P::Destination as Destination>::MEMBERS,
            members,
            projection: Box::new(boxed),
        });
        Ok(self)
    }

    pub fn build(self) -> RuleSet {
        RuleSet { maps: self.maps, index: self.index }
    }
}

/// Runs `setup` against a fresh builder and returns the resulting rule set.
///
/// The rule set is not validated yet; see [`RuleSet::validate`].
pub fn configure<F>(setup: F) -> Result<RuleSet, ConfigurationError>
where
    F: FnOnce(&mut RuleSetBuilder) -> Result<(), ConfigurationError>,
{
    let mut builder = RuleSetBuilder::default();
    setup(&mut builder)?;
    Ok(builder.build())
}

/// Every registered type map. Immutable once built.
pub struct RuleSet {
    maps: Vec<TypeMap>,
    index: HashMap<TypePair, usize>,
}

impl RuleSet {
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    pub fn contains<S: 'static, D: Destination>(&self) -> bool {
        self.index.contains_key(&TypePair::of::<S, D>())
    }

    /// Registered pairs in registration order.
    pub fn type_pairs(&self) -> impl Iterator<Item = TypePair> + '_ {
        self.maps.iter().map(|map| map.pair)
    }

    /// Checks that every destination member of every type map is accounted
    /// for, and that nested members point at registered type maps.
    #[instrument(skip(self), fields(type_maps = self.maps.len()))]
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for map in &self.maps {
            self.validate_map(map)?;
        }
        debug!("Rule set is valid");
        Ok(())
    }

    fn validate_map(&self, map: &TypeMap) -> Result<(), ConfigurationError> {
        let mut seen: HashSet<&'static str> = HashSet::new();

        for rule in &map.members {
            if !map.destination_members.contains(&rule.destination) {
                return Err(ConfigurationError::UnknownMember {
                    pair: map.pair.to_string(),
                    member: rule.destination.to_string(),
                });
            }
            if !seen.insert(rule.destination) {
                warn!(pair = %map.pair, member = rule.destination, "Member declared more than once");
            }
            if let Some(nested) = rule.nested_map() {
                if !self.index.contains_key(&nested) {
                    return Err(ConfigurationError::MissingNestedMap {
                        pair: map.pair.to_string(),
                        member: rule.destination.to_string(),
                        nested: nested.to_string(),
                    });
                }
            }
        }

        let unmapped: Vec<String> = map
            .destination_members
            .iter()
            .filter(|member| !seen.contains(*member))
            .map(|member| member.to_string())
            .collect();
        if !unmapped.is_empty() {
            return Err(ConfigurationError::UnmappedMembers {
                pair: map.pair.to_string(),
                members: unmapped,
            });
        }
        Ok(())
    }

    fn projection<S: 'static, D: Destination>(&self) -> Option<&dyn Projection<Source = S, Destination = D>> {
        let slot = *self.index.get(&TypePair::of::<S, D>())?;
        self.maps[slot]
            .projection
            .downcast_ref::<BoxedProjection<S, D>>()
            .map(|boxed| boxed.as_ref())
    }
}

// =============================================================================
// 3. THE ENGINE (Mapper and per-call Context)
// =============================================================================

/// Applies a validated [`RuleSet`]. Cheap to clone and safe to share between threads.
#[derive(Clone)]
pub struct Mapper {
    rules: Arc<RuleSet>,
    config: MapperConfig,
}

impl Mapper {
    /// Validates `rules` and wraps them. An invalid rule set never produces a mapper.
    pub fn new(rules: RuleSet, config: MapperConfig) -> Result<Self, ConfigurationError> {
        rules.validate()?;
        Ok(Self { rules: Arc::new(rules), config })
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    #[instrument(
        name = "map",
        skip_all,
        fields(source = short_type_name::<S>(), destination = short_type_name::<D>())
    )]
    pub fn map<S: 'static, D: Destination>(&self, source: &S) -> Result<D, MappingError> {
        debug!("Mapping");
        MappingContext::new(&self.rules, &self.config).map(source)
    }

    pub fn map_each<S: 'static, D: Destination>(&self, sources: &[S]) -> Result<Vec<D>, MappingError> {
        MappingContext::new(&self.rules, &self.config).map_each(sources)
    }
}

/// State of a single mapping call: the sources currently being projected.
pub struct MappingContext<'a> {
    rules: &'a RuleSet,
    config: &'a MapperConfig,
    in_progress: Vec<(TypeId, usize)>,
}

impl<'a> MappingContext<'a> {
    fn new(rules: &'a RuleSet, config: &'a MapperConfig) -> Self {
        Self { rules, config, in_progress: Vec::new() }
    }

    pub fn depth(&self) -> usize {
        self.in_progress.len()
    }

    /// Maps `source` through the registered `S -> D` type map.
    pub fn map<S: 'static, D: Destination>(&mut self, source: &S) -> Result<D, MappingError> {
        let rules = self.rules;
        let projection = rules.projection::<S, D>().ok_or_else(|| MappingError::MissingTypeMap {
            source_type: short_type_name::<S>().to_string(),
            destination_type: short_type_name::<D>().to_string(),
        })?;

        let key = identity(source);
        if self.in_progress.contains(&key) {
            return Err(MappingError::CycleDetected {
                type_name: short_type_name::<S>().to_string(),
            });
        }
        if self.in_progress.len() >= self.config.max_depth {
            return Err(MappingError::DepthExceeded { max_depth: self.config.max_depth });
        }

        self.in_progress.push(key);
        let result = projection.project(source, self);
        self.in_progress.pop();
        result
    }

    /// Maps every element, preserving order. Stops at the first failure.
    pub fn map_each<S: 'static, D: Destination>(&mut self, sources: &[S]) -> Result<Vec<D>, MappingError> {
        sources.iter().map(|source| self.map(source)).collect()
    }

    /// Follows a weak link. Absent or dangling links map to `None`; a link back
    /// to a source that is still being mapped is handled per [`CyclePolicy`].
    pub fn map_link<S: 'static, D: Destination>(&mut self, link: Option<&Weak<S>>) -> Result<Option<D>, MappingError> {
        let Some(target) = link.and_then(Weak::upgrade) else {
            return Ok(None);
        };

        if self.in_progress.contains(&identity(target.as_ref())) {
            match self.config.cycle_policy {
                CyclePolicy::Truncate => {
                    debug!(type_name = short_type_name::<S>(), depth = self.depth(), "Cycle truncated");
                    return Ok(None);
                }
                CyclePolicy::Reject => {
                    return Err(MappingError::CycleDetected {
                        type_name: short_type_name::<S>().to_string(),
                    });
                }
            }
        }

        self.map::<S, D>(target.as_ref()).map(Some)
    }
}

fn identity<S: 'static>(source: &S) -> (TypeId, usize) {
    (TypeId::of::<S>(), source as *const S as usize)
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================
