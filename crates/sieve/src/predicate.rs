//! The predicate expression tree and its evaluation.
//!
//! A [`Predicate`] is an immutable boolean expression built bottom-up from
//! field comparisons and conjunctions. `AlwaysTrue` is the identity of
//! conjunction; [`Predicate::and`] folds it away so built trees carry no
//! redundant identity nodes.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::path::FieldPath;
use crate::value::{Number, Value};

/// Boolean-valued expression used to filter records.
///
/// # Example
///
/// ```
/// use sieve::{NumberPath, Predicate, StringPath};
///
/// const USERNAME: StringPath = StringPath::new("member", "username");
/// const AGE: NumberPath = NumberPath::new("member", "age");
///
/// let predicate = Predicate::AlwaysTrue
///     .and(AGE.goe(20))
///     .and(AGE.loe(35));
///
/// assert_eq!(predicate.to_string(), "member.age >= 20 and member.age <= 35");
/// assert_eq!(Predicate::AlwaysTrue.and(USERNAME.eq("member1")), USERNAME.eq("member1"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Matches every record.
    #[default]
    AlwaysTrue,
    /// `field = value`.
    FieldEquals { field: FieldPath, value: Literal },
    /// `field >= value`.
    FieldGreaterOrEqual { field: FieldPath, value: Number },
    /// `field <= value`.
    FieldLessOrEqual { field: FieldPath, value: Number },
    /// Both sides must match.
    And(Box<Predicate>, Box<Predicate>),
}

impl Predicate {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Conjunction of `self` and `other`.
    ///
    /// An `AlwaysTrue` operand is dropped: `AlwaysTrue.and(p) == p` and
    /// `p.and(AlwaysTrue) == p`.
    pub fn and(self, other: Predicate) -> Predicate {
        match (self, other) {
            (Predicate::AlwaysTrue, p) | (p, Predicate::AlwaysTrue) => p,
            (left, right) => Predicate::And(Box::new(left), Box::new(right)),
        }
    }

    /// Left fold of `predicates` with [`and`](Self::and), starting from
    /// `AlwaysTrue`.
    pub fn all<I>(predicates: I) -> Predicate
    where
        I: IntoIterator<Item = Predicate>,
    {
        predicates
            .into_iter()
            .fold(Predicate::AlwaysTrue, Predicate::and)
    }

    /// Rebuilds the tree through [`and`](Self::and), removing every
    /// `AlwaysTrue` operand below a conjunction.
    ///
    /// The result evaluates identically to `self`.
    pub fn simplify(self) -> Predicate {
        match self {
            Predicate::And(left, right) => (*left).simplify().and((*right).simplify()),
            other => other,
        }
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns `true` if this is the identity predicate.
    pub fn is_always_true(&self) -> bool {
        matches!(self, Predicate::AlwaysTrue)
    }

    /// Returns the comparison leaves, left to right.
    ///
    /// Identity nodes are not comparisons and are skipped.
    pub fn clauses(&self) -> Vec<&Predicate> {
        let mut out = Vec::new();
        self.collect_clauses(&mut out);
        out
    }

    fn collect_clauses<'p>(&'p self, out: &mut Vec<&'p Predicate>) {
        match self {
            Predicate::AlwaysTrue => {}
            Predicate::And(left, right) => {
                left.collect_clauses(out);
                right.collect_clauses(out);
            }
            leaf => out.push(leaf),
        }
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single item matches this predicate.
    ///
    /// The accessor function extracts field values from the item. A missing
    /// field (`Value::None`) or a value of the wrong type never satisfies a
    /// comparison.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &FieldPath) -> Value<'a>,
    {
        self.eval(item, &accessor)
    }

    fn eval<T, F>(&self, item: &T, accessor: &F) -> bool
    where
        for<'a> F: Fn(&'a T, &FieldPath) -> Value<'a>,
    {
        match self {
            Predicate::AlwaysTrue => true,
            Predicate::FieldEquals { field, value } => value.matches(&accessor(item, field)),
            Predicate::FieldGreaterOrEqual { field, value } => {
                compare_number(&accessor(item, field), *value)
                    .is_some_and(|ordering| ordering != Ordering::Less)
            }
            Predicate::FieldLessOrEqual { field, value } => {
                compare_number(&accessor(item, field), *value)
                    .is_some_and(|ordering| ordering != Ordering::Greater)
            }
            Predicate::And(left, right) => left.eval(item, accessor) && right.eval(item, accessor),
        }
    }

    /// Filters a slice, returning references to matching items in input order.
    pub fn filter<'a, T, F>(&self, items: &'a [T], accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &FieldPath) -> Value<'b>,
    {
        items
            .iter()
            .filter(|item| self.eval(*item, &accessor))
            .collect()
    }

    /// Filters and clones matching items.
    pub fn filter_cloned<T, F>(&self, items: &[T], accessor: F) -> Vec<T>
    where
        T: Clone,
        for<'a> F: Fn(&'a T, &FieldPath) -> Value<'a>,
    {
        self.filter(items, accessor).into_iter().cloned().collect()
    }

    /// Counts the number of matching items.
    pub fn count<T, F>(&self, items: &[T], accessor: F) -> usize
    where
        for<'a> F: Fn(&'a T, &FieldPath) -> Value<'a>,
    {
        items
            .iter()
            .filter(|item| self.eval(*item, &accessor))
            .count()
    }

    /// Returns `true` if any item matches.
    pub fn any<T, F>(&self, items: &[T], accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &FieldPath) -> Value<'a>,
    {
        items.iter().any(|item| self.eval(item, &accessor))
    }

    /// Finds the first matching item.
    pub fn find<'a, T, F>(&self, items: &'a [T], accessor: F) -> Option<&'a T>
    where
        for<'b> F: Fn(&'b T, &FieldPath) -> Value<'b>,
    {
        items.iter().find(|item| self.eval(*item, &accessor))
    }
}

fn compare_number(field: &Value<'_>, bound: Number) -> Option<Ordering> {
    match field {
        Value::Number(n) => n.compare(bound),
        _ => None,
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::AlwaysTrue => f.write_str("true"),
            Predicate::FieldEquals { field, value } => write!(f, "{field} = {value}"),
            Predicate::FieldGreaterOrEqual { field, value } => write!(f, "{field} >= {value}"),
            Predicate::FieldLessOrEqual { field, value } => write!(f, "{field} <= {value}"),
            Predicate::And(left, right) => write!(f, "{left} and {right}"),
        }
    }
}

/// Owned right-hand side of an equality clause.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    String(String),
    Number(Number),
}

impl Literal {
    /// Evaluates equality against a field value.
    ///
    /// Type mismatches and `Value::None` do not match.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        match (self, field_value) {
            (Literal::String(expected), Value::String(actual)) => expected == actual,
            (Literal::Number(expected), Value::Number(actual)) => {
                actual.compare(*expected) == Some(Ordering::Equal)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Literal::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<Number> for Literal {
    fn from(n: Number) -> Self {
        Literal::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{NumberPath, StringPath};

    const USERNAME: StringPath = StringPath::new("member", "username");
    const AGE: NumberPath = NumberPath::new("member", "age");
    const TEAM_NAME: StringPath = StringPath::new("team", "name");

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        username: String,
        age: i32,
        team: Option<String>,
    }

    fn accessor<'a>(row: &'a Row, path: &FieldPath) -> Value<'a> {
        match (path.entity(), path.name()) {
            ("member", "username") => Value::String(&row.username),
            ("member", "age") => Value::Number(Number::from(row.age)),
            ("team", "name") => Value::from(row.team.as_deref()),
            _ => Value::None,
        }
    }

    fn rows() -> Vec<Row> {
        [
            ("member1", 10, Some("teamA")),
            ("member2", 20, Some("teamA")),
            ("member3", 30, Some("teamB")),
            ("member4", 40, Some("teamB")),
            ("drifter", 25, None),
        ]
        .into_iter()
        .map(|(username, age, team)| Row {
            username: username.to_string(),
            age,
            team: team.map(str::to_string),
        })
        .collect()
    }

    fn names<'a>(rows: &[&'a Row]) -> Vec<&'a str> {
        rows.iter().map(|r| r.username.as_str()).collect()
    }

    #[test]
    fn and_drops_identity_operands() {
        let clause = USERNAME.eq("member1");
        assert_eq!(Predicate::AlwaysTrue.and(clause.clone()), clause);
        assert_eq!(clause.clone().and(Predicate::AlwaysTrue), clause);
        assert_eq!(
            Predicate::AlwaysTrue.and(Predicate::AlwaysTrue),
            Predicate::AlwaysTrue
        );
    }

    #[test]
    fn bounds_equal_across_integer_types() {
        assert_eq!(AGE.goe(20u8), AGE.goe(20i32));
        assert_eq!(AGE.eq(30u64), AGE.eq(30i64));
        assert_ne!(AGE.loe(20u8), AGE.loe(21i32));
    }

    #[test]
    fn and_nests_left() {
        let p = AGE.goe(20).and(AGE.loe(35)).and(TEAM_NAME.eq("teamA"));
        match p {
            Predicate::And(left, right) => {
                assert!(matches!(*left, Predicate::And(_, _)));
                assert_eq!(*right, TEAM_NAME.eq("teamA"));
            }
            other => panic!("expected conjunction, got {other:?}"),
        }
    }

    #[test]
    fn all_of_nothing_is_identity() {
        assert_eq!(Predicate::all(Vec::new()), Predicate::AlwaysTrue);
        assert_eq!(
            Predicate::all([Predicate::AlwaysTrue, AGE.goe(1), Predicate::AlwaysTrue]),
            AGE.goe(1)
        );
    }

    #[test]
    fn default_is_always_true() {
        assert!(Predicate::default().is_always_true());
        assert!(!AGE.goe(1).is_always_true());
    }

    #[test]
    fn always_true_matches_everything() {
        let rows = rows();
        assert_eq!(Predicate::AlwaysTrue.count(&rows, accessor), rows.len());
    }

    #[test]
    fn string_equality_is_exact() {
        let rows = rows();
        let results = USERNAME.eq("member1").filter(&rows, accessor);
        assert_eq!(names(&results), ["member1"]);
        assert!(!USERNAME.eq("Member1").any(&rows, accessor));
    }

    #[test]
    fn number_bounds_are_inclusive() {
        let rows = rows();
        let results = AGE.goe(20).and(AGE.loe(30)).filter(&rows, accessor);
        assert_eq!(names(&results), ["member2", "member3", "drifter"]);
    }

    #[test]
    fn number_equality_across_kinds() {
        let rows = rows();
        let found = AGE.eq(30u64).find(&rows, accessor);
        assert_eq!(found.map(|r| r.username.as_str()), Some("member3"));
        assert!(AGE.eq(30.0).any(&rows, accessor));
    }

    #[test]
    fn missing_field_never_matches() {
        let rows = rows();
        let results = TEAM_NAME.eq("teamA").filter(&rows, accessor);
        assert_eq!(names(&results), ["member1", "member2"]);

        let unknown = NumberPath::new("member", "height");
        assert_eq!(unknown.goe(0).count(&rows, accessor), 0);
    }

    #[test]
    fn type_mismatch_never_matches() {
        let rows = rows();
        let age_as_string = StringPath::new("member", "age");
        assert!(!age_as_string.eq("10").any(&rows, accessor));

        let name_as_number = NumberPath::new("member", "username");
        assert!(!name_as_number.loe(100).any(&rows, accessor));
    }

    #[test]
    fn nan_bound_never_matches() {
        let rows = rows();
        assert!(!AGE.goe(f64::NAN).any(&rows, accessor));
        assert!(!AGE.loe(f64::NAN).any(&rows, accessor));
    }

    #[test]
    fn simplify_removes_nested_identity() {
        let unfolded = Predicate::And(
            Box::new(Predicate::And(
                Box::new(Predicate::AlwaysTrue),
                Box::new(AGE.goe(20)),
            )),
            Box::new(Predicate::AlwaysTrue),
        );
        assert_eq!(unfolded.clone().simplify(), AGE.goe(20));

        let rows = rows();
        assert_eq!(
            unfolded.filter(&rows, accessor),
            AGE.goe(20).filter(&rows, accessor)
        );
    }

    #[test]
    fn clauses_in_order() {
        let p = Predicate::And(
            Box::new(USERNAME.eq("member1")),
            Box::new(Predicate::And(
                Box::new(Predicate::AlwaysTrue),
                Box::new(AGE.loe(10)),
            )),
        );
        assert_eq!(p.clauses(), vec![&USERNAME.eq("member1"), &AGE.loe(10)]);
        assert!(Predicate::AlwaysTrue.clauses().is_empty());
    }

    #[test]
    fn filter_cloned_and_count_agree() {
        let rows = rows();
        let p = AGE.loe(20);
        let cloned = p.filter_cloned(&rows, accessor);
        assert_eq!(cloned.len(), p.count(&rows, accessor));
        assert_eq!(cloned[0], rows[0]);
    }

    #[test]
    fn display_renders_query_text() {
        let p = USERNAME
            .eq("member1")
            .and(TEAM_NAME.eq("teamA"))
            .and(AGE.goe(20))
            .and(AGE.loe(35));
        assert_eq!(
            p.to_string(),
            "member.username = 'member1' and team.name = 'teamA' \
             and member.age >= 20 and member.age <= 35"
        );
        assert_eq!(Predicate::AlwaysTrue.to_string(), "true");
        assert_eq!(USERNAME.eq("o'brien").to_string(), "member.username = 'o''brien'");
        assert_eq!(AGE.eq(10).to_string(), "member.age = 10");
    }

    #[test]
    fn literal_matching() {
        assert!(Literal::from("a").matches(&Value::String("a")));
        assert!(!Literal::from("a").matches(&Value::None));
        assert!(Literal::from(Number::I64(3)).matches(&Value::Number(Number::U64(3))));
        assert!(!Literal::from(Number::I64(3)).matches(&Value::String("3")));
    }
}
