//! Recursive descent grammar
//!
//!     One method per grammar rule. Each rule starts on the token that selected it and leaves
//!     the cursor on the first token it did not consume.

use super::cursor::Cursor;
use super::error::{Expectation, SyntaxError};
use crate::tex::ast::elements::macros::{is_macro_name_char, BEGIN};
use crate::tex::ast::{
    Argument, Delimiter, Document, Enclosed, Environment, EscapeSequence, Macro, MathRegion,
    Node, ScriptOperator, Separator, SubSuperScript, Text,
};
use crate::tex::token::TokenKind;

pub struct Parser<'source> {
    cursor: Cursor<'source>,
}

impl<'source> Parser<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Parse the whole source into a document
    pub fn parse(mut self) -> Result<Document, SyntaxError> {
        let document = self.document();
        match &document {
            Ok(document) => tracing::debug!(nodes = document.children.len(), "parsed document"),
            Err(error) => tracing::debug!(%error, "parse failed"),
        }
        document
    }

    fn document(&mut self) -> Result<Document, SyntaxError> {
        let mut children = Vec::new();
        while !self.cursor.at_end() {
            children.push(self.child()?);
        }
        self.cursor.eat(TokenKind::EndOfStream)?;
        Ok(Document::new(children))
    }

    fn child(&mut self) -> Result<Node, SyntaxError> {
        match self.cursor.kind() {
            TokenKind::Backslash => {
                let start = self.cursor.current().offset;
                match self.escape_or_macro()? {
                    Node::Macro(mac) => match mac.environment_name(BEGIN).map(str::to_string) {
                        Some(name) => self.environment(name, mac, start).map(Node::from),
                        None => Ok(mac.into()),
                    },
                    other => Ok(other),
                }
            }
            TokenKind::Dollar => self.math_region().map(Node::from),
            TokenKind::LeftCurly | TokenKind::LeftSquare => self.enclosed().map(Node::from),
            TokenKind::Circumflex | TokenKind::Underscore => self.script().map(Node::from),
            TokenKind::Ampersand => {
                self.cursor.advance();
                Ok(Separator.into())
            }
            kind if kind.is_text() => Ok(self.text().into()),
            _ => Err(SyntaxError::new(
                Expectation::Content,
                &self.cursor.current(),
            )),
        }
    }

    /// Children up to (not including) `closing` or the end of input
    fn children_until(&mut self, closing: TokenKind) -> Result<Vec<Node>, SyntaxError> {
        let mut children = Vec::new();
        while !self.cursor.at_end() && !self.cursor.at(closing) {
            children.push(self.child()?);
        }
        Ok(children)
    }

    /// `\` followed by a name (macro) or by any single other character (escape)
    fn escape_or_macro(&mut self) -> Result<Node, SyntaxError> {
        self.cursor.eat(TokenKind::Backslash)?;

        let mut name = String::new();
        while self.cursor.at(TokenKind::Char)
            && is_macro_name_char(self.cursor.current().character())
        {
            name.push_str(self.cursor.current().literal);
            self.cursor.advance();
        }

        if name.is_empty() {
            let escaped = self.cursor.current();
            // A trailing backslash escapes the end-of-stream sentinel, which stays current
            if !self.cursor.at_end() {
                self.cursor.advance();
            }
            return Ok(EscapeSequence::new(escaped.character()).into());
        }

        let arguments = self.arguments()?;
        Ok(Macro::new(name, arguments).into())
    }

    /// Any number of `{..}` / `[..]` groups, blanks allowed before and between them
    fn arguments(&mut self) -> Result<Vec<Argument>, SyntaxError> {
        let mut arguments = Vec::new();
        self.cursor.skip_blank();
        while Delimiter::from_opening(self.cursor.kind()).is_some() {
            arguments.push(self.enclosed()?.into());
            self.cursor.skip_blank();
        }
        Ok(arguments)
    }

    fn enclosed(&mut self) -> Result<Enclosed, SyntaxError> {
        let opening = Delimiter::from_opening(self.cursor.kind()).ok_or_else(|| {
            SyntaxError::new(
                Expectation::Token(TokenKind::LeftCurly),
                &self.cursor.current(),
            )
        })?;
        self.cursor.advance();
        let children = self.children_until(opening.closing())?;
        self.cursor.eat(opening.closing())?;
        Ok(Enclosed::new(opening, children))
    }

    /// `$..$` or `$$..$$`
    fn math_region(&mut self) -> Result<MathRegion, SyntaxError> {
        self.cursor.eat(TokenKind::Dollar)?;
        let display = self.cursor.at(TokenKind::Dollar);
        if display {
            self.cursor.advance();
        }

        let children = self.children_until(TokenKind::Dollar)?;
        self.cursor.eat(TokenKind::Dollar)?;
        if display {
            self.cursor.eat(TokenKind::Dollar)?;
            Ok(MathRegion::display(children))
        } else {
            Ok(MathRegion::inline(children))
        }
    }

    /// `^`/`_` applied to a braced group or to a single character
    fn script(&mut self) -> Result<SubSuperScript, SyntaxError> {
        let operator = ScriptOperator::from_token(self.cursor.kind()).ok_or_else(|| {
            SyntaxError::new(
                Expectation::Token(TokenKind::Circumflex),
                &self.cursor.current(),
            )
        })?;
        self.cursor.advance();

        let children = match self.cursor.kind() {
            TokenKind::LeftCurly => {
                self.cursor.advance();
                let children = self.children_until(TokenKind::RightCurly)?;
                self.cursor.eat(TokenKind::RightCurly)?;
                children
            }
            TokenKind::Char => {
                let operand = self.cursor.current();
                self.cursor.advance();
                vec![Text::new(operand.literal).into()]
            }
            _ => Vec::new(),
        };
        Ok(SubSuperScript::new(operator, children))
    }

    /// Body of an environment opened by `begin`, up to the matching `\end{name}`
    fn environment(
        &mut self,
        name: String,
        begin: Macro,
        start: usize,
    ) -> Result<Environment, SyntaxError> {
        tracing::trace!(name = %name, offset = start, "entering environment");
        // The first argument is the name itself
        let arguments = begin.arguments.into_iter().skip(1).collect();

        let mut children = Vec::new();
        while !self.cursor.at_end() {
            let child = self.child()?;
            if let Node::Macro(mac) = &child {
                if mac.closes_environment(&name) {
                    return Ok(Environment::new(name, arguments, children));
                }
            }
            children.push(child);
        }

        Err(SyntaxError::new(
            Expectation::EnvironmentEnd {
                name,
                opened_at: start,
            },
            &self.cursor.current(),
        ))
    }

    /// Maximal run of characters, spaces and newlines
    fn text(&mut self) -> Text {
        let mut text = String::new();
        while self.cursor.kind().is_text() {
            text.push_str(self.cursor.current().literal);
            self.cursor.advance();
        }
        Text::new(text)
    }
}
