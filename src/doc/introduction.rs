/*!
# Introductory Tutorial for the Stack Machine

Start the `sm` executable in a terminal. You should see the banner and
a blinking cursor.
<pre><code>&nbsp;  Stack Machine
&nbsp;  Type BYE or CTRL-D to exit.
&nbsp;   ok
&nbsp;> █
</code></pre>

Every line you type is split into words at whitespace and each word runs
immediately, left to right. A word that looks like an integer is pushed
on to the data stack. Anything else is looked up in the dictionary and
executed. When the whole line has run, `ok` is printed. Lines you type are
marked with "`>`".

<pre><code>&nbsp;> 2 3 + .
&nbsp;  5  ok
</code></pre>

`2` and `3` were pushed, `+` replaced them with their sum and `.` printed
and removed it. Arithmetic works on 64 bit integers and wraps around
instead of overflowing.

Use `.s` to look at the stack without changing it. The number in angle
brackets is the depth; the bottom of the stack is on the left.

<pre><code>&nbsp;> 1 2 3 .s
&nbsp;  &lt;3&gt; 1 2 3  ok
&nbsp;> swap .s
&nbsp;  &lt;3&gt; 1 3 2  ok
</code></pre>

Upper and lower case are the same to the dictionary, so `DUP`, `Dup` and
`dup` are one word. `words` lists everything the dictionary knows.

## Errors

When a word fails, the rest of the line is abandoned, an error is printed
instead of `ok`, and both stacks are emptied. Nothing else is lost.

<pre><code>&nbsp;> 5 0 /
&nbsp;  error: division by zero: /
&nbsp;> .s
&nbsp;  &lt;0&gt;  ok
</code></pre>

## Strings and execution tokens

`s"` pushes the text up to the next double quote. Text can be run with
`evaluate`, or looked up with `find`, which leaves an execution token and
a flag. An execution token runs with `execute`.

<pre><code>&nbsp;> s" 6 7 *" evaluate .
&nbsp;  42  ok
&nbsp;> 4 s" dup" find .s
&nbsp;  &lt;3&gt; 4 &lt;xt dup&gt; -1  ok
&nbsp;> drop execute * .
&nbsp;  16  ok
</code></pre>

## Memory

`allocate` reserves cells and leaves the address of the first one.
`!` stores any value into a cell and `@` fetches it back.

<pre><code>&nbsp;> 1 allocate drop
&nbsp;  ok
&nbsp;> dup 99 swap ! @ .
&nbsp;  99  ok
</code></pre>

Files named on the command line are loaded before the first prompt, so
`sm setup.fs` runs `setup.fs` line by line and then waits for you.
Type `bye` to leave.

*/
