/*!
(The internal representation of) an atom (aka. a 'variable').

Atoms are things to which assigning a (boolean) value is of interest.

Each atom is a u32, and the atoms of a problem are expected to be a contiguous slice of indicies starting from 0 --- [0..*m*) for some *m*.
This representation allows atoms to be used as the indicies of a structure, e.g. `occurrences[a]`, without taking too much space.

The count of atoms in a problem is always derived: it is one more than the largest atom referenced by any clause given to a presolver.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom, bounded so a literal index fits a usize on any platform.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
