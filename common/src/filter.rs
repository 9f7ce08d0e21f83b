use std::collections::BTreeSet;

use crate::metric::strip_subtask_index;

/// Filtro de ids de métricas: union de matches exactos y por substring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricFilter {
    /// Nombres lógicos (sin índice de subtask). Coinciden con el nombre
    /// completo o con sus últimos segmentos: `cnt` acepta `0.a.cnt` pero no `0.a.xcnt`.
    /// `None` si la lista no se pasó; `Some(vec![])` si se pasó vacía.
    pub exact: Option<Vec<String>>,
    /// Substrings buscados en el id completo
    pub like: Option<Vec<String>>,
    /// Solo afecta a `like`
    pub ignore_case: bool,
}

fn split_list(list: Option<&str>) -> Option<Vec<String>> {
    list.map(|l| {
        l.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
}

impl MetricFilter {
    /// Arma el filtro desde las listas separadas por coma de la CLI.
    pub fn from_lists(exact: Option<&str>, like: Option<&str>, ignore_case: bool) -> Self {
        Self {
            exact: split_list(exact),
            like: split_list(like),
            ignore_case,
        }
    }

    /// Ninguna lista pasada: no hay filtro.
    pub fn is_empty(&self) -> bool {
        self.exact.is_none() && self.like.is_none()
    }

    fn matches_exact(&self, id: &str) -> bool {
        let name = strip_subtask_index(id);
        self.exact.iter().flatten().any(|e| {
            name == e
                || name
                    .strip_suffix(e.as_str())
                    .is_some_and(|head| head.ends_with('.'))
        })
    }

    fn matches_like(&self, id: &str) -> bool {
        if self.ignore_case {
            let id = id.to_lowercase();
            self.like
                .iter()
                .flatten()
                .any(|l| id.contains(&l.to_lowercase()))
        } else {
            self.like.iter().flatten().any(|l| id.contains(l.as_str()))
        }
    }

    /// Sin listas devuelve la entrada tal cual (con duplicados incluidos).
    /// Con alguna lista, aunque quede vacía, devuelve los ids distintos que pasan, ordenados.
    /// Cada id conserva su índice de subtask: colapsar es trabajo del agregador.
    pub fn apply(&self, ids: Vec<String>) -> Vec<String> {
        if self.is_empty() {
            return ids;
        }

        let selected: BTreeSet<String> = ids
            .into_iter()
            .filter(|id| self.matches_exact(id) || self.matches_like(id))
            .collect();

        selected.into_iter().collect()
    }
}
