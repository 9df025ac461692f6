//! Population of valid candidates with elitist size-based selection.

use rand::Rng;
use tracing::debug;

use crate::graph::{Candidate, DiskGraph};
use crate::greedy::greedy;
use crate::local_search::local_search;
use crate::validate::is_valid;

/// Candidates of one solve. Sorted ascending by size after every `select`.
#[derive(Clone, Debug)]
pub struct Population {
    members: Vec<Candidate>,
}

impl Population {
    /// Seed with `size` independent greedy runs.
    ///
    /// Panics if the seed population is empty or holds an invalid member;
    /// either would be a bug in greedy construction or validation.
    pub fn seed<R: Rng + ?Sized>(
        graph: &DiskGraph,
        size: usize,
        top_k: usize,
        rng: &mut R,
    ) -> Self {
        let mut members = Vec::with_capacity(size + 1);
        for _ in 0..size {
            let c = greedy(graph, top_k, rng);
            if is_valid(graph, &c) {
                members.push(c);
            }
        }
        assert!(!members.is_empty(), "initial population is empty");
        assert!(
            members.iter().all(|c| is_valid(graph, c)),
            "initial population holds an invalid candidate"
        );
        Self { members }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Candidate] {
        &self.members
    }

    /// Smallest member; the earliest one on ties.
    pub fn best(&self) -> &Candidate {
        // non-empty by construction
        let mut best = &self.members[0];
        for c in &self.members[1..] {
            if c.len() < best.len() {
                best = c;
            }
        }
        best
    }

    pub fn into_best(mut self) -> Candidate {
        self.sort();
        self.members.swap_remove(0)
    }

    /// Replace each member by its local-search descendant when that is valid.
    pub fn mutate(&mut self, graph: &DiskGraph) {
        for member in self.members.iter_mut() {
            let mutated = local_search(graph, member);
            if is_valid(graph, &mutated) {
                *member = mutated;
            } else {
                debug!(size = member.len(), "mutation_rejected");
            }
        }
    }

    /// Append one fresh greedy candidate if it is valid.
    pub fn inject<R: Rng + ?Sized>(&mut self, graph: &DiskGraph, top_k: usize, rng: &mut R) {
        let fresh = greedy(graph, top_k, rng);
        if is_valid(graph, &fresh) {
            self.members.push(fresh);
        }
    }

    /// Sort by size and drop the single worst member if above `target`.
    pub fn select(&mut self, target: usize) {
        self.sort();
        if self.members.len() > target {
            self.members.pop();
        }
    }

    /// One generation: mutate, inject, select. Returns the best size.
    pub fn step<R: Rng + ?Sized>(&mut self, graph: &DiskGraph, top_k: usize, rng: &mut R) -> usize {
        let target = self.members.len();
        self.mutate(graph);
        self.inject(graph, top_k, rng);
        self.select(target);
        self.best().len()
    }

    // stable: equal sizes keep their relative order
    fn sort(&mut self) {
        self.members.sort_by_key(Candidate::len);
    }
}
