/*!
# Words

Stack effects are written `( before -- after )` with the top of the stack
on the right. `n` is an integer, `x` any value, `s` text, `xt` an
execution token and `a-addr` a memory address.
*/

pub mod DEPTH {
    /*!
    ## `depth ( -- n )` Pushes the number of values on the stack.
    ```text
    1 2 depth .
    2  ok
    ```
    */
}

pub mod DUP {
    /*!
    ## `dup ( x -- x x )` Copies the top value.
    */
}

pub mod DROP {
    /*!
    ## `drop ( x -- )` Discards the top value.
    */
}

pub mod SWAP {
    /*!
    ## `swap ( x1 x2 -- x2 x1 )` Exchanges the top two values.
    */
}

pub mod OVER {
    /*!
    ## `over ( x1 x2 -- x1 x2 x1 )` Copies the second value to the top.
    */
}

pub mod PICK {
    /*!
    ## `pick ( ... n -- ... x )` Replaces n with a copy of the value n cells down.
    The cell holding n itself is counted as cell zero.
    ```text
    10 20 30 2 pick .
    20  ok
    ```
    */
}

pub mod ARITHMETIC {
    /*!
    ## `+ - * / ( n1 n2 -- n3 )` Integer arithmetic.
    Results wrap around on overflow. `/` truncates toward zero and fails
    with `division by zero` when n2 is zero.
    ```text
    7 -2 / .
    -3  ok
    ```
    */
}

pub mod STORE_FETCH {
    /*!
    ## `! ( x a-addr -- )` and `@ ( a-addr -- x )` Write and read a memory cell.
    */
}

pub mod ALLOCATE {
    /*!
    ## `allocate ( n -- a-addr ior )` Reserves n cells, all holding zero.
    `ior` is zero on success and -59 when memory is exhausted.
    `cell+ ( a-addr -- a-addr )` steps to the following cell.
    */
}

pub mod FIND {
    /*!
    ## `find ( s -- s 0 | xt -1 | xt 1 )` Looks up a name.
    The flag is -1 for an ordinary word and 1 for an immediate word.
    When the name is unknown the text stays on the stack under 0.
    */
}

pub mod TICK {
    /*!
    ## `' <name> ( -- xt )` Pushes the execution token of the next word on the line.
    */
}

pub mod EXECUTE {
    /*!
    ## `execute ( i*x xt -- j*x )` Runs an execution token.
    */
}

pub mod EVALUATE {
    /*!
    ## `evaluate ( i*x s -- j*x )` Interprets text as if it were typed.
    The text shares the stack with the caller.
    */
}

pub mod OUTPUT {
    /*!
    ## Output
    `. ( x -- )` prints a value and a space. `.s ( -- )` prints the whole
    stack. `cr` starts a new line, `emit ( n -- )` prints a character,
    `bl ( -- 32 )` pushes a space and `." <text>"` prints text.
    `words` lists the dictionary in sorted order.
    */
}

pub mod STRINGS {
    /*!
    ## `s" <text>" ( -- s )` Pushes text up to the closing quote.
    */
}

pub mod QUIT_BYE {
    /*!
    ## `quit` and `bye`
    `quit` reads and interprets lines until input ends. `bye` leaves it.
    */
}
