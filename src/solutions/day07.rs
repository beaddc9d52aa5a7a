use std::collections::{HashMap, HashSet};

use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 7: Some Assembly Required",
    parsed = Circuit,
    part_one = Day07,
    part_two = Day07
)]
impl super::AdventOfCode2015<7> {}

/*
Input is a circuit of wires, one per line. Each line gives a source for a wire's 16-bit signal,
`->`, then the wire's name:

- `123 -> x` provides a literal signal, and `x -> y` forwards another wire.
- `x AND y -> z` and `x OR y -> z` are bitwise gates.
- `p LSHIFT 2 -> q` and `p RSHIFT 2 -> q` shift by an amount.
- `NOT e -> f` is the bitwise complement.

Any operand can be a wire name or a literal. Each wire has exactly one source.
*/

/// A gate operand: either a literal signal or the signal carried by another wire.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Operand {
    Value(u16),
    Wire(String),
}

impl Operand {
    fn parse(token: &str) -> DynamicResult<Self> {
        if token.starts_with(|c: char| c.is_ascii_digit()) {
            Ok(Self::Value(parse_with_context(token)?))
        } else if !token.is_empty() && token.chars().all(|c| c.is_ascii_lowercase()) {
            Ok(Self::Wire(token.to_owned()))
        } else {
            Err(ParseCircuitError::InvalidOperand(token.to_owned()).into())
        }
    }
}

/// The source of a wire's signal.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Gate {
    Direct(Operand),
    And(Operand, Operand),
    Or(Operand, Operand),
    LeftShift(Operand, Operand),
    RightShift(Operand, Operand),
    Not(Operand),
}

#[derive(thiserror::Error, Debug)]
enum ParseCircuitError {
    #[error("expected \"->\" separating a gate from its output wire")]
    MissingArrow,

    #[error("unrecognized gate: {0:?}")]
    UnrecognizedGate(String),

    #[error("operand is neither a signal nor a wire name: {0:?}")]
    InvalidOperand(String),

    #[error("wire {0:?} is connected to more than one source")]
    DuplicateWire(String),
}

impl Gate {
    fn parse(source: &str) -> DynamicResult<Self> {
        let tokens: Vec<_> = source.split_whitespace().collect();
        let gate = match tokens.as_slice() {
            [operand] => Self::Direct(Operand::parse(operand)?),
            ["NOT", operand] => Self::Not(Operand::parse(operand)?),
            [left, operator, right] => {
                let left = Operand::parse(left)?;
                let right = Operand::parse(right)?;
                match *operator {
                    "AND" => Self::And(left, right),
                    "OR" => Self::Or(left, right),
                    "LSHIFT" => Self::LeftShift(left, right),
                    "RSHIFT" => Self::RightShift(left, right),
                    _ => {
                        return Err(ParseCircuitError::UnrecognizedGate(source.to_owned()).into());
                    }
                }
            }
            _ => return Err(ParseCircuitError::UnrecognizedGate(source.to_owned()).into()),
        };
        Ok(gate)
    }
}

/// Every wire of the circuit mapped to the gate providing its signal.
#[derive(Debug)]
struct Circuit {
    gates: HashMap<String, Gate>,
}

impl ParseData for Circuit {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut gates = HashMap::new();
        parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let (source, wire) = line
                .split_once("->")
                .ok_or(ParseCircuitError::MissingArrow)?;
            let wire = match Operand::parse(wire.trim())? {
                Operand::Wire(name) => name,
                Operand::Value(_) => {
                    return Err(ParseCircuitError::InvalidOperand(wire.trim().to_owned()).into());
                }
            };
            let gate = Gate::parse(source)?;
            if gates.insert(wire.clone(), gate).is_some() {
                return Err(ParseCircuitError::DuplicateWire(wire).into());
            }
            Ok(())
        })
        .collect::<Result<(), _>>()?;
        Ok(Self { gates })
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
enum SignalError {
    #[error("wire {0:?} has no source")]
    UnknownWire(String),

    #[error("wire {0:?} depends on its own signal")]
    Cycle(String),
}

/// Resolves wire signals of a circuit, remembering each signal once known.
struct SignalResolver<'a> {
    circuit: &'a Circuit,
    signals: HashMap<&'a str, u16>,
    /// Wires whose signal is being resolved, to detect loops.
    resolving: HashSet<&'a str>,
}

impl<'a> SignalResolver<'a> {
    fn new(circuit: &'a Circuit) -> Self {
        Self {
            circuit,
            signals: HashMap::new(),
            resolving: HashSet::new(),
        }
    }

    /// Fix a wire's signal, ignoring the gate the circuit connects to it.
    fn with_override(mut self, wire: &'a str, signal: u16) -> Self {
        self.signals.insert(wire, signal);
        self
    }

    fn operand(&mut self, operand: &'a Operand) -> Result<u16, SignalError> {
        match operand {
            Operand::Value(value) => Ok(*value),
            Operand::Wire(wire) => self.signal(wire),
        }
    }

    fn signal(&mut self, wire: &'a str) -> Result<u16, SignalError> {
        if let Some(&signal) = self.signals.get(wire) {
            return Ok(signal);
        }
        let circuit = self.circuit;
        let (name, gate) = circuit
            .gates
            .get_key_value(wire)
            .ok_or_else(|| SignalError::UnknownWire(wire.to_owned()))?;
        if !self.resolving.insert(name) {
            return Err(SignalError::Cycle(wire.to_owned()));
        }

        let signal = match gate {
            Gate::Direct(operand) => self.operand(operand)?,
            Gate::And(left, right) => self.operand(left)? & self.operand(right)?,
            Gate::Or(left, right) => self.operand(left)? | self.operand(right)?,
            Gate::LeftShift(value, amount) => {
                let value = self.operand(value)?;
                value.checked_shl(u32::from(self.operand(amount)?)).unwrap_or(0)
            }
            Gate::RightShift(value, amount) => {
                let value = self.operand(value)?;
                value.checked_shr(u32::from(self.operand(amount)?)).unwrap_or(0)
            }
            Gate::Not(operand) => !self.operand(operand)?,
        };

        self.resolving.remove(name.as_str());
        self.signals.insert(name, signal);
        Ok(signal)
    }
}

/*
For part 1, find the signal provided to wire `a`.
*/

struct Day07;

impl Solution<PartOne> for Day07 {
    type Input = Circuit;
    type Output = u16;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(SignalResolver::new(input).signal("a")?)
    }
}

/*
For part 2, override wire `b` with the signal part 1 found on wire `a`, reset the other wires, and
find the new signal on wire `a`.
*/

impl Solution<PartTwo> for Day07 {
    type Input = Circuit;
    type Output = u16;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let first_a = SignalResolver::new(input).signal("a")?;
        let second_a = SignalResolver::new(input)
            .with_override("b", first_a)
            .signal("a")?;
        Ok(second_a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"123 -> x
456 -> y
x AND y -> d
x OR y -> e
x LSHIFT 2 -> f
y RSHIFT 2 -> g
NOT x -> h
NOT y -> i
";

    #[test]
    fn resolves_example_wires() -> DynamicResult<()> {
        let circuit = Circuit::parse(EXAMPLE_INPUT)?;
        let mut resolver = SignalResolver::new(&circuit);
        for (wire, expected) in [
            ("d", 72),
            ("e", 507),
            ("f", 492),
            ("g", 114),
            ("h", 65412),
            ("i", 65079),
            ("x", 123),
            ("y", 456),
        ] {
            assert_eq!(resolver.signal(wire)?, expected, "wire {wire}");
        }
        Ok(())
    }

    #[test]
    fn sources_may_be_listed_after_use() -> DynamicResult<()> {
        let circuit = Circuit::parse("b AND 255 -> c\nc LSHIFT 1 -> a\n123 -> b\n")?;
        assert_eq!(<Day07 as Solution<PartOne>>::solve(&circuit)?, 246);
        Ok(())
    }

    #[test]
    fn part_two_overrides_b() -> DynamicResult<()> {
        let circuit = Circuit::parse("123 -> b\nb AND 255 -> c\nc LSHIFT 1 -> a\n")?;
        assert_eq!(<Day07 as Solution<PartTwo>>::solve(&circuit)?, 492);
        Ok(())
    }

    #[test]
    fn unknown_wire_and_cycle_are_errors() -> DynamicResult<()> {
        let circuit = Circuit::parse("x -> a\na AND 1 -> c\n")?;
        assert_eq!(
            SignalResolver::new(&circuit).signal("c"),
            Err(SignalError::UnknownWire("x".to_owned()))
        );
        assert_eq!(
            SignalResolver::new(&circuit).signal("z"),
            Err(SignalError::UnknownWire("z".to_owned()))
        );

        let circuit = Circuit::parse("b -> a\nNOT a -> b\n")?;
        let mut resolver = SignalResolver::new(&circuit);
        assert_eq!(resolver.signal("a"), Err(SignalError::Cycle("a".to_owned())));
        Ok(())
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        assert!(Circuit::parse("123 x").is_err());
        assert!(Circuit::parse("x XOR y -> z").is_err());
        assert!(Circuit::parse("1 -> 2").is_err());
        assert!(Circuit::parse("1 -> a\n2 -> a").is_err());
    }
}
