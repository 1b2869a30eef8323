/*!
Formatting and parsing of expanded times.

An [`ExpandedTime`](crate::ExpandedTime) has two textual forms:

* The *canonical* form, written by its `Display` impl. This is the wrapped
wall clock time, prefixed by `+N ` when there are `N > 0` excess days. For
example, `+1 01:30`.
* The *expanded-hour* form, written by
[`ExpandedTime::display_expanded`](crate::ExpandedTime::display_expanded).
The excess days are folded back into the hour. For example, `25:30`.

Both forms write `HH:MM`, followed by `:SS` only when the seconds or
fractional seconds are non-zero, followed by a fraction only when it is
non-zero. The fraction uses the shortest of 3, 6 or 9 digits that represents
it exactly. It is never rounded.

Both forms can be parsed back with `str::parse`. For parsing other formats,
see the lenient [`strtime`] module.
*/

pub(crate) mod printer;
pub mod strtime;
pub(crate) mod temporal;
mod util;
